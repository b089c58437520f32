// src/config/validate.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::config::model::{RawSettingsFile, Settings};
use crate::errors::{DepwatchError, Result};

impl TryFrom<RawSettingsFile> for Settings {
    type Error = DepwatchError;

    fn try_from(raw: RawSettingsFile) -> std::result::Result<Self, Self::Error> {
        let cfg = raw.config;

        if cfg.dependencies.trim().is_empty() {
            return Err(DepwatchError::ConfigError(
                "[config].dependencies must not be empty".to_string(),
            ));
        }

        let poll_interval = parse_poll_interval(&cfg.interval)?;

        Ok(Settings {
            dependencies: PathBuf::from(cfg.dependencies.trim()),
            poll_interval,
            watch_dependents: cfg.watch_dependents,
            wake_on_fs_events: cfg.wake_on_fs_events,
        })
    }
}

/// Parse a polling interval and reject zero, which would turn the loop into a
/// busy spin.
pub fn parse_poll_interval(s: &str) -> Result<Duration> {
    let interval = parse_duration(s).map_err(|e| {
        DepwatchError::ConfigError(format!("invalid [config].interval '{}': {}", s, e))
    })?;

    if interval.is_zero() {
        return Err(DepwatchError::ConfigError(format!(
            "[config].interval must be greater than zero (got '{}')",
            s
        )));
    }

    Ok(interval)
}

/// Parse a simple duration string like `"5s"`, `"250ms"`, `"1m"`, `"2h"`.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Find the boundary between digits and suffix.
    let idx = s
        .chars()
        .position(|c| !c.is_ascii_digit())
        .ok_or_else(|| "duration missing unit suffix".to_string())?;

    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid duration number '{}': {}", num_part, e))?;
    let unit = unit_part.trim().to_lowercase();

    match unit.as_str() {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => scaled_secs(value, 60),
        "h" => scaled_secs(value, 60 * 60),
        _ => Err(format!(
            "unsupported duration unit '{}'; expected ms, s, m, or h",
            unit
        )),
    }
}

fn scaled_secs(value: u64, factor: u64) -> std::result::Result<Duration, String> {
    value
        .checked_mul(factor)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration too large: {value} x {factor}s"))
}
