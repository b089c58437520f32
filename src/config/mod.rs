// src/config/mod.rs

//! Settings loading and validation for depwatch.
//!
//! Responsibilities:
//! - Define the TOML-backed settings model (`model.rs`).
//! - Load an optional settings file from disk (`loader.rs`).
//! - Validate and convert raw values, e.g. duration strings (`validate.rs`).
//!
//! The dependency graph itself is loaded by [`crate::graph`]; this module only
//! knows *where* it lives.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_settings_path, load_from_path, load_settings};
pub use model::{ConfigSection, RawSettingsFile, Settings};
pub use validate::parse_duration;
