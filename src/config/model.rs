// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Settings file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// dependencies = "dependencies.json"
/// interval = "5s"
/// watch_dependents = false
/// wake_on_fs_events = false
/// ```
///
/// Every field is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSettingsFile {
    #[serde(default)]
    pub config: ConfigSection,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Path to the dependency source (JSON, or TOML by extension).
    #[serde(default = "default_dependencies")]
    pub dependencies: String,

    /// Suspension between polling cycles, e.g. `"5s"` or `"250ms"`.
    #[serde(default = "default_interval")]
    pub interval: String,

    /// Also poll paths that only appear as dependents.
    ///
    /// Off by default: only graph keys are fingerprinted.
    #[serde(default)]
    pub watch_dependents: bool,

    /// End the idle suspension early when the OS reports a change to a
    /// watched path.
    #[serde(default)]
    pub wake_on_fs_events: bool,
}

fn default_dependencies() -> String {
    "dependencies.json".to_string()
}

fn default_interval() -> String {
    "5s".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            dependencies: default_dependencies(),
            interval: default_interval(),
            watch_dependents: false,
            wake_on_fs_events: false,
        }
    }
}

/// Validated settings used to build the watch loop.
///
/// Constructed via `TryFrom<RawSettingsFile>` (see `validate.rs`), then
/// adjusted by CLI overrides in `lib.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dependencies: PathBuf,
    pub poll_interval: Duration,
    pub watch_dependents: bool,
    pub wake_on_fs_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dependencies: PathBuf::from(default_dependencies()),
            poll_interval: Duration::from_secs(5),
            watch_dependents: false,
            wake_on_fs_events: false,
        }
    }
}
