// src/graph/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, warn};

use crate::errors::{DepwatchError, Result};
use crate::graph::model::{DependencyGraph, DependentPath, WatchedPath};
use crate::graph::source::RawDependencySource;

impl TryFrom<RawDependencySource> for DependencyGraph {
    type Error = DepwatchError;

    fn try_from(raw: RawDependencySource) -> std::result::Result<Self, Self::Error> {
        validate_paths(&raw)?;
        warn_on_suspicious_edges(&raw);

        let mut listeners: Vec<(WatchedPath, Vec<DependentPath>)> =
            Vec::with_capacity(raw.entries.len());
        for (source, deps) in raw.entries {
            let source = WatchedPath::new(source);
            let slot = match listeners.iter().position(|(path, _)| *path == source) {
                Some(i) => i,
                None => {
                    listeners.push((source, Vec::with_capacity(deps.len())));
                    listeners.len() - 1
                }
            };
            let (source, unique) = &mut listeners[slot];
            for dep in deps {
                let dep = DependentPath::new(dep);
                if unique.contains(&dep) {
                    debug!(source = %source, dependent = %dep, "dropping duplicate dependent");
                    continue;
                }
                unique.push(dep);
            }
        }

        Ok(DependencyGraph::new_unchecked(listeners))
    }
}

fn validate_paths(raw: &RawDependencySource) -> Result<()> {
    for (source, deps) in raw.entries.iter() {
        if source.trim().is_empty() {
            return Err(DepwatchError::GraphError(
                "dependency source contains an empty file path as a key".to_string(),
            ));
        }
        if deps.iter().any(|d| d.trim().is_empty()) {
            return Err(DepwatchError::GraphError(format!(
                "file '{}' lists an empty path among its dependents",
                source
            )));
        }
    }
    Ok(())
}

/// Self-listings and cycles are legal (only one hop is ever reported), but
/// they usually mean the source was written backwards.
fn warn_on_suspicious_edges(raw: &RawDependencySource) {
    if raw.entries.is_empty() {
        warn!("dependency source is empty; nothing will be watched");
    }

    for (source, deps) in raw.entries.iter() {
        if deps.iter().any(|d| d == source) {
            warn!(file = %source, "file lists itself as its own dependent");
        }
    }

    if let Some(node) = find_cycle(raw) {
        warn!(file = %node, "dependency cycle detected");
    }
}

/// Return a file that takes part in a dependency cycle, if any.
///
/// Edge direction: source -> dependent. Self-listings are ignored here.
pub fn find_cycle(raw: &RawDependencySource) -> Option<String> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for (source, deps) in raw.entries.iter() {
        graph.add_node(source.as_str());
        for dep in deps.iter().filter(|d| *d != source) {
            graph.add_edge(source.as_str(), dep.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => None,
        Err(cycle) => Some(cycle.node_id().to_string()),
    }
}
