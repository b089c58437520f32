// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawSettingsFile, Settings};
use crate::errors::Result;

/// Load a settings file from a given path and return the raw `RawSettingsFile`.
///
/// This only performs TOML deserialization; use [`load_settings`] for the
/// validated form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSettingsFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawSettingsFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Resolve and validate settings.
///
/// - `Some(path)`: the file was asked for explicitly, so it must exist and
///   parse.
/// - `None`: look for [`default_settings_path`]; if it is absent the built-in
///   defaults are used.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let raw = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let path = default_settings_path();
            if path.is_file() {
                load_from_path(&path)?
            } else {
                debug!(path = ?path, "no settings file found, using defaults");
                RawSettingsFile::default()
            }
        }
    };

    Settings::try_from(raw)
}

/// Default settings file: `Depwatch.toml` in the current working directory.
pub fn default_settings_path() -> PathBuf {
    PathBuf::from("Depwatch.toml")
}
