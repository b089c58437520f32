// src/watch/mod.rs

//! Change detection.
//!
//! This module is responsible for:
//! - Fingerprinting a single file by content (`fingerprint`).
//! - Remembering the last fingerprint per watched file (`tracker`).
//! - Mapping a changed file to the dependents it invalidates (`resolver`).
//! - Optionally waking the loop early on OS file events (`fs_events`).
//!
//! It does **not** schedule anything; the polling loop lives in
//! [`crate::engine`].

pub mod fingerprint;
pub mod fs_events;
pub mod path_utils;
pub mod resolver;
pub mod tracker;

pub use fingerprint::{fingerprint, Fingerprint};
pub use fs_events::{spawn_fs_waker, FsWakeHandle};
pub use resolver::{InvalidationResolver, Verdict};
pub use tracker::{ChangeKind, ChangeTracker};
