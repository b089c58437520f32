use std::sync::{Arc, Mutex};
use std::time::Duration;

use depwatch::engine::{ChangeEvent, CycleSummary, Reporter};
use depwatch::graph::WatchedPath;

/// What a `RecordingReporter` saw, flattened to plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Started { watched: Vec<String> },
    ChangeDetected { path: String },
    DependentsAffected { path: String, dependents: Vec<String> },
    UpdateConfirmed { path: String },
    CycleCompleted { cycle: u64, changes: usize },
}

/// Reporter that records every event. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// Reports excluding cycle boundaries and the start banner.
    pub fn change_reports(&self) -> Vec<Report> {
        self.reports()
            .into_iter()
            .filter(|r| !matches!(r, Report::CycleCompleted { .. } | Report::Started { .. }))
            .collect()
    }

    pub fn cycles_completed(&self) -> u64 {
        self.reports()
            .iter()
            .filter(|r| matches!(r, Report::CycleCompleted { .. }))
            .count() as u64
    }

    pub fn clear(&self) {
        self.reports.lock().unwrap().clear();
    }

    fn push(&self, report: Report) {
        self.reports.lock().unwrap().push(report);
    }
}

impl Reporter for RecordingReporter {
    fn tracking_started(&mut self, watched: &[WatchedPath], _interval: Duration) {
        self.push(Report::Started {
            watched: watched.iter().map(|p| p.to_string()).collect(),
        });
    }

    fn change_detected(&mut self, event: &ChangeEvent) {
        self.push(Report::ChangeDetected {
            path: event.path.to_string(),
        });
    }

    fn dependents_affected(&mut self, event: &ChangeEvent) {
        self.push(Report::DependentsAffected {
            path: event.path.to_string(),
            dependents: event.dependents.iter().map(|d| d.to_string()).collect(),
        });
    }

    fn update_confirmed(&mut self, event: &ChangeEvent) {
        self.push(Report::UpdateConfirmed {
            path: event.path.to_string(),
        });
    }

    fn cycle_completed(&mut self, summary: &CycleSummary) {
        self.push(Report::CycleCompleted {
            cycle: summary.cycle,
            changes: summary.changes.len(),
        });
    }
}
