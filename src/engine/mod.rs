// src/engine/mod.rs

//! Polling engine for depwatch.
//!
//! The synchronous cycle logic lives in [`core`] (fingerprint, classify,
//! resolve, report); the async shell in [`runtime`] owns the timing: the idle
//! suspension, optional fs-event wake-ups and shutdown.

use std::path::PathBuf;
use std::time::Duration;

use crate::graph::{DependentPath, WatchedPath};
use crate::watch::Fingerprint;

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Between cycles (and before the first one).
    Idle,
    /// Iterating the watched files of one cycle.
    Polling,
}

/// A detected content change, produced during a cycle and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: WatchedPath,
    pub previous: Fingerprint,
    pub current: Fingerprint,
    /// Direct dependents, in declaration order. Empty means self-consistent.
    pub dependents: Vec<DependentPath>,
}

/// Cycle-boundary status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    /// 1-based cycle counter.
    pub cycle: u64,
    pub polled: usize,
    /// Files that were missing or unreadable this cycle.
    pub absent: usize,
    pub changes: Vec<ChangeEvent>,
}

/// Knobs shared by the core and the async shell.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Directory that relative graph paths are resolved against.
    pub root: PathBuf,
    pub poll_interval: Duration,
    /// Poll dependents too, not just graph keys.
    pub watch_dependents: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            poll_interval: Duration::from_secs(5),
            watch_dependents: false,
        }
    }
}

pub mod core;
pub mod report;
pub mod runtime;

pub use self::core::CoreLoop;
pub use report::{Reporter, TracingReporter};
pub use runtime::WatchLoop;
