// src/graph/model.rs

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A path that is polled for changes (a key of the dependency source).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WatchedPath(String);

/// A path that must be revisited when its source changes (a value of the
/// dependency source).
///
/// Kept apart from [`WatchedPath`] so that "what we poll" and "what we report"
/// cannot be mixed up by accident, even though both are plain strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DependentPath(String);

impl WatchedPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DependentPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WatchedPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WatchedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DependentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Polling a dependent makes it a watched path in its own right.
impl From<&DependentPath> for WatchedPath {
    fn from(dep: &DependentPath) -> Self {
        WatchedPath(dep.0.clone())
    }
}

/// Immutable mapping from each watched file to its direct dependents.
///
/// Built once at startup via `TryFrom<RawDependencySource>` (see
/// `validate.rs`). Keys keep the order they were declared in the source.
/// Dependents keep their declaration order with duplicates removed.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    listeners: Vec<(WatchedPath, Vec<DependentPath>)>,
    index: HashMap<WatchedPath, usize>,
}

impl DependencyGraph {
    /// `listeners` must not repeat a key.
    pub(crate) fn new_unchecked(listeners: Vec<(WatchedPath, Vec<DependentPath>)>) -> Self {
        let index = listeners
            .iter()
            .enumerate()
            .map(|(i, (path, _))| (path.clone(), i))
            .collect();
        Self { listeners, index }
    }

    /// All graph keys, in declaration order.
    pub fn watched(&self) -> impl Iterator<Item = &WatchedPath> {
        self.listeners.iter().map(|(path, _)| path)
    }

    /// Direct dependents of `path`; empty if it has none or is not a key.
    pub fn dependents_of(&self, path: &str) -> &[DependentPath] {
        self.index
            .get(path)
            .map(|&i| self.listeners[i].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Number of watched keys.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Every `(source, dependent)` edge.
    pub fn edges(&self) -> impl Iterator<Item = (&WatchedPath, &DependentPath)> {
        self.listeners
            .iter()
            .flat_map(|(src, deps)| deps.iter().map(move |dep| (src, dep)))
    }

    /// The set of paths a polling cycle visits.
    ///
    /// Keys come first in declaration order. With `include_dependents`, every
    /// dependent that is not itself a key follows, in first-appearance order.
    pub fn watched_paths(&self, include_dependents: bool) -> Vec<WatchedPath> {
        let mut paths: Vec<WatchedPath> = self.watched().cloned().collect();

        if include_dependents {
            let mut seen: HashSet<&str> = self.watched().map(|k| k.as_str()).collect();
            for (_, dep) in self.edges() {
                if seen.insert(dep.as_str()) {
                    paths.push(WatchedPath::from(dep));
                }
            }
        }

        paths
    }
}
