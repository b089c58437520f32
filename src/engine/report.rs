// src/engine/report.rs

//! Reporting sink.
//!
//! The engine guarantees *when* each event fires; how it is rendered is up to
//! the implementation. [`TracingReporter`] is what the binary uses.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::engine::{ChangeEvent, CycleSummary};
use crate::graph::WatchedPath;

pub trait Reporter: Send {
    /// Emitted once, right before the first cycle.
    fn tracking_started(&mut self, watched: &[WatchedPath], interval: Duration);

    /// A watched file's fingerprint differs from the previous cycle.
    fn change_detected(&mut self, event: &ChangeEvent);

    /// The changed file has dependents that now need attention.
    fn dependents_affected(&mut self, event: &ChangeEvent);

    /// The changed file has no dependents; nothing else to do.
    fn update_confirmed(&mut self, event: &ChangeEvent);

    fn cycle_completed(&mut self, summary: &CycleSummary);
}

/// Renders reports as `tracing` events.
#[derive(Debug, Default, Clone)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn tracking_started(&mut self, watched: &[WatchedPath], interval: Duration) {
        info!(watched = watched.len(), ?interval, "tracking file changes");
    }

    fn change_detected(&mut self, event: &ChangeEvent) {
        info!(
            file = %event.path,
            previous = %event.previous,
            current = %event.current,
            "file changed"
        );
    }

    fn dependents_affected(&mut self, event: &ChangeEvent) {
        let dependents: Vec<&str> = event.dependents.iter().map(|d| d.as_str()).collect();
        warn!(file = %event.path, ?dependents, "changes require updates to dependents");
        error!(file = %event.path, ?dependents, "update required before proceeding");
    }

    fn update_confirmed(&mut self, event: &ChangeEvent) {
        info!(file = %event.path, "file updated successfully");
    }

    fn cycle_completed(&mut self, summary: &CycleSummary) {
        debug!(
            cycle = summary.cycle,
            polled = summary.polled,
            absent = summary.absent,
            changes = summary.changes.len(),
            "cycle complete"
        );
    }
}
