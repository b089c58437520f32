// src/watch/resolver.rs

use std::sync::Arc;

use crate::graph::{DependencyGraph, DependentPath};

/// Outcome of resolving a changed file against the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing depends on the file; it is consistent on its own.
    Consistent,
    /// These dependents must be revisited before the tree is consistent again.
    UpdateRequired(Vec<DependentPath>),
}

/// Maps a changed file to its direct dependents.
///
/// Advisory only: it neither blocks nor retries, and it does not follow
/// dependents of dependents.
#[derive(Debug, Clone)]
pub struct InvalidationResolver {
    graph: Arc<DependencyGraph>,
}

impl InvalidationResolver {
    pub fn new(graph: Arc<DependencyGraph>) -> Self {
        Self { graph }
    }

    /// Direct dependents of `changed`, in declaration order.
    pub fn resolve(&self, changed: &str) -> Vec<DependentPath> {
        self.graph.dependents_of(changed).to_vec()
    }

    pub fn verdict(&self, changed: &str) -> Verdict {
        let dependents = self.resolve(changed);
        if dependents.is_empty() {
            Verdict::Consistent
        } else {
            Verdict::UpdateRequired(dependents)
        }
    }
}
