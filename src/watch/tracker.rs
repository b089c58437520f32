// src/watch/tracker.rs

use std::collections::HashMap;

use tracing::trace;

use crate::graph::WatchedPath;
use crate::watch::fingerprint::Fingerprint;

/// Classification of a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// First time this path is observed in the process lifetime. Never a
    /// change, whatever the fingerprint.
    FirstSeen,
    Unchanged,
    Changed,
}

/// Last-observed fingerprint of every watched file.
///
/// Owned by the watch loop; there is no global state. Entries are never
/// removed, and every observation overwrites the stored value, so the map
/// always holds what the previous cycle saw.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    last_seen: HashMap<WatchedPath, Fingerprint>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self {
            last_seen: HashMap::new(),
        }
    }

    /// Record `current` for `path` and classify it against the previous
    /// observation.
    pub fn observe(&mut self, path: &WatchedPath, current: Fingerprint) -> ChangeKind {
        let kind = match self.last_seen.get(path) {
            None => ChangeKind::FirstSeen,
            Some(previous) if *previous == current => ChangeKind::Unchanged,
            Some(_) => ChangeKind::Changed,
        };

        trace!(path = %path, ?kind, fingerprint = %current, "observed");
        self.last_seen.insert(path.clone(), current);
        kind
    }

    /// Like [`observe`](Self::observe), but also hands back the fingerprint
    /// that was replaced.
    pub fn observe_with_previous(
        &mut self,
        path: &WatchedPath,
        current: Fingerprint,
    ) -> (ChangeKind, Option<Fingerprint>) {
        let previous = self.last_seen.get(path).cloned();
        let kind = self.observe(path, current);
        (kind, previous)
    }

    pub fn last_seen(&self, path: &str) -> Option<&Fingerprint> {
        self.last_seen.get(path)
    }

    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }
}
