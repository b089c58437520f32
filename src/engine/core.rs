// src/engine/core.rs

//! One polling cycle, with no timing and no async.
//!
//! Everything observable about change detection happens here, so it can be
//! driven cycle by cycle from tests with a mock filesystem.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::engine::report::Reporter;
use crate::engine::{ChangeEvent, CycleSummary, LoopOptions, LoopState};
use crate::fs::FileSystem;
use crate::graph::{DependencyGraph, WatchedPath};
use crate::watch::path_utils::resolve_against;
use crate::watch::{fingerprint, ChangeKind, ChangeTracker, InvalidationResolver, Verdict};

pub struct CoreLoop {
    root: PathBuf,
    watched: Vec<WatchedPath>,
    fs: Arc<dyn FileSystem>,
    tracker: ChangeTracker,
    resolver: InvalidationResolver,
    reporter: Box<dyn Reporter>,
    state: LoopState,
    cycles: u64,
}

impl std::fmt::Debug for CoreLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreLoop")
            .field("root", &self.root)
            .field("watched", &self.watched)
            .field("state", &self.state)
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}

impl CoreLoop {
    pub fn new(
        graph: Arc<DependencyGraph>,
        options: &LoopOptions,
        fs: Arc<dyn FileSystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        let watched = graph.watched_paths(options.watch_dependents);
        Self {
            root: options.root.clone(),
            watched,
            fs,
            tracker: ChangeTracker::new(),
            resolver: InvalidationResolver::new(graph),
            reporter,
            state: LoopState::Idle,
            cycles: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Paths visited by every cycle, in polling order.
    pub fn watched(&self) -> &[WatchedPath] {
        &self.watched
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    pub(crate) fn announce(&mut self, interval: Duration) {
        self.reporter.tracking_started(&self.watched, interval);
    }

    /// Run one full Idle -> Polling -> Idle pass over every watched path.
    ///
    /// Per-file problems never escape: unreadable files become absent
    /// fingerprints and the pass carries on.
    pub fn run_cycle(&mut self) -> CycleSummary {
        self.state = LoopState::Polling;
        let cycle = self.cycles + 1;
        debug!(cycle, watched = self.watched.len(), "polling");

        let mut absent = 0;
        let mut changes = Vec::new();

        for path in self.watched.iter() {
            let current = fingerprint(self.fs.as_ref(), &resolve_against(&self.root, path.as_str()));
            if current.is_absent() {
                absent += 1;
            }

            let (kind, previous) = self.tracker.observe_with_previous(path, current.clone());
            if kind != ChangeKind::Changed {
                continue;
            }
            // Changed implies a previous observation exists.
            let Some(previous) = previous else { continue };

            let verdict = self.resolver.verdict(path.as_str());
            let dependents = match &verdict {
                Verdict::Consistent => Vec::new(),
                Verdict::UpdateRequired(deps) => deps.clone(),
            };

            let event = ChangeEvent {
                path: path.clone(),
                previous,
                current,
                dependents,
            };

            self.reporter.change_detected(&event);
            match verdict {
                Verdict::UpdateRequired(_) => self.reporter.dependents_affected(&event),
                Verdict::Consistent => self.reporter.update_confirmed(&event),
            }

            changes.push(event);
        }

        self.cycles = cycle;
        let summary = CycleSummary {
            cycle,
            polled: self.watched.len(),
            absent,
            changes,
        };
        self.reporter.cycle_completed(&summary);
        self.state = LoopState::Idle;
        summary
    }
}
