// src/watch/fs_events.rs

//! Optional OS-level change notification.
//!
//! Polling stays authoritative: this only shortens the idle suspension of the
//! watch loop when `notify` reports activity on a watched path. It never reads
//! files and never touches tracker state.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::info;

use crate::graph::WatchedPath;
use crate::watch::path_utils::{normalize, relative_str};

/// Keeps the underlying `RecommendedWatcher` alive. Dropping it stops the
/// notifications.
pub struct FsWakeHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for FsWakeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsWakeHandle").finish()
    }
}

/// Watch `root` recursively and send `()` whenever an event touches one of
/// `watched` (declared paths, relative to `root`).
pub fn spawn_fs_waker(
    root: impl Into<PathBuf>,
    watched: &[WatchedPath],
) -> Result<(FsWakeHandle, mpsc::UnboundedReceiver<()>)> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone());

    let interesting: HashSet<String> = watched.iter().map(|p| normalize(p.as_str())).collect();
    let (wake_tx, wake_rx) = mpsc::unbounded_channel::<()>();

    let callback_root = root.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if touches_watched(&callback_root, &event, &interesting) {
                    // Receiver gone means the loop has stopped; nothing to do.
                    let _ = wake_tx.send(());
                }
            }
            Err(err) => {
                // Runs on notify's thread, outside any span.
                eprintln!("depwatch: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!("fs event wake-up enabled on {:?}", root);

    Ok((FsWakeHandle { _inner: watcher }, wake_rx))
}

fn touches_watched(root: &Path, event: &Event, interesting: &HashSet<String>) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }

    event.paths.iter().any(|path| {
        relative_str(root, path).is_some_and(|rel| interesting.contains(&rel))
            || interesting.contains(&normalize(&path.to_string_lossy()))
    })
}
