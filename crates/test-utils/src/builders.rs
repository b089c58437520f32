#![allow(dead_code)]

use std::sync::Arc;

use depwatch::engine::{CoreLoop, LoopOptions};
use depwatch::fs::mock::MockFileSystem;
use depwatch::graph::{DependencyGraph, RawDependencySource};

use crate::recording::RecordingReporter;

/// Builder for `DependencyGraph` to avoid writing source files in tests.
pub struct GraphBuilder {
    raw: RawDependencySource,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawDependencySource::default(),
        }
    }

    /// Declare `file` with the given dependents (appends if already declared).
    pub fn with_file(mut self, file: &str, dependents: &[&str]) -> Self {
        self.raw
            .declare(file, dependents.iter().map(|d| d.to_string()));
        self
    }

    pub fn raw(self) -> RawDependencySource {
        self.raw
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph::try_from(self.raw).expect("Failed to build valid graph from builder")
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A `CoreLoop` over an in-memory filesystem rooted at `/project`.
///
/// Returns the loop plus handles to mutate files and inspect reports.
pub fn mock_core(
    graph: DependencyGraph,
    watch_dependents: bool,
) -> (CoreLoop, MockFileSystem, RecordingReporter) {
    let fs = MockFileSystem::new();
    let reporter = RecordingReporter::new();
    let options = LoopOptions {
        root: "/project".into(),
        watch_dependents,
        ..LoopOptions::default()
    };
    let core = CoreLoop::new(
        Arc::new(graph),
        &options,
        Arc::new(fs.clone()),
        Box::new(reporter.clone()),
    );
    (core, fs, reporter)
}

/// Absolute mock path for a declared graph path.
pub fn mock_path(declared: &str) -> String {
    format!("/project/{declared}")
}
