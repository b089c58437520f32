// src/graph/source.rs

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::graph::model::DependencyGraph;

/// Dependency source exactly as declared: `{ "file": ["dependent", ...] }`.
///
/// The same shape is accepted from JSON and from TOML (a top-level table of
/// string arrays):
///
/// ```toml
/// "lib.py" = ["app.py", "cli.py"]
/// "schema.sql" = ["models.py"]
/// ```
///
/// Entries keep the order of the source document.
#[derive(Debug, Clone, Default)]
pub struct RawDependencySource {
    pub entries: Vec<(String, Vec<String>)>,
}

impl RawDependencySource {
    /// Declare `file` with `dependents`, appending if it is already declared.
    pub fn declare(&mut self, file: impl Into<String>, dependents: impl IntoIterator<Item = String>) {
        let file = file.into();
        match self.entries.iter_mut().find(|(f, _)| *f == file) {
            Some((_, deps)) => deps.extend(dependents),
            None => self.entries.push((file, dependents.into_iter().collect())),
        }
    }
}

/// On-disk encoding of the dependency source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// `.toml` selects TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
            _ => SourceFormat::Json,
        }
    }
}

/// Parse and validate a dependency source held in memory.
pub fn parse_source(contents: &str, format: SourceFormat) -> Result<DependencyGraph> {
    let raw = match format {
        SourceFormat::Json => raw_from_json(contents)?,
        SourceFormat::Toml => raw_from_toml(contents)?,
    };

    DependencyGraph::try_from(raw)
}

// Both maps are insertion-ordered (`preserve_order` on serde_json and toml).
fn raw_from_json(contents: &str) -> Result<RawDependencySource> {
    let table: serde_json::Map<String, serde_json::Value> = serde_json::from_str(contents)?;

    let mut raw = RawDependencySource::default();
    for (file, deps) in table {
        let deps: Vec<String> = serde_json::from_value(deps)?;
        raw.declare(file, deps);
    }
    Ok(raw)
}

fn raw_from_toml(contents: &str) -> Result<RawDependencySource> {
    let table: toml::Table = toml::from_str(contents)?;

    let mut raw = RawDependencySource::default();
    for (file, deps) in table {
        let deps: Vec<String> = deps.try_into()?;
        raw.declare(file, deps);
    }
    Ok(raw)
}

/// Load the dependency graph from disk.
///
/// Any failure here is fatal for startup: the caller must not start polling
/// with a partial graph.
pub fn load_graph(path: impl AsRef<Path>) -> Result<DependencyGraph> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("reading dependency source {}: {e}", path.display()))
    })?;
    let graph = parse_source(&contents, SourceFormat::from_path(path))?;

    info!(
        source = ?path,
        watched = graph.len(),
        edges = graph.edges().count(),
        "loaded dependency graph"
    );

    Ok(graph)
}
