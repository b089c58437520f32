// src/graph/mod.rs

//! Dependency graph: which files must be revisited when a watched file changes.
//!
//! - [`model`] holds the immutable in-memory mapping and the two path roles.
//! - [`source`] reads the declarative source (JSON or TOML) from disk.
//! - [`validate`] rejects malformed sources and warns about suspicious ones.

pub mod model;
pub mod source;
pub mod validate;

pub use model::{DependencyGraph, DependentPath, WatchedPath};
pub use source::{load_graph, parse_source, RawDependencySource, SourceFormat};
pub use validate::find_cycle;
