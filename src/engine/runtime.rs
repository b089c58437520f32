// src/engine/runtime.rs

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::engine::core::CoreLoop;
use crate::graph::WatchedPath;

/// Settle time after an fs-event wake-up, so a burst of writes to one file
/// is picked up by a single cycle.
const WAKE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Async shell around [`CoreLoop`].
///
/// Alternates a full cycle with an idle suspension of `interval`. Cycles never
/// overlap: the next one starts only after the previous cycle and its
/// suspension are both over.
#[derive(Debug)]
pub struct WatchLoop {
    core: CoreLoop,
    interval: Duration,
    /// Optional early wake-up source (see `watch::fs_events`).
    wake_rx: Option<mpsc::UnboundedReceiver<()>>,
}

impl WatchLoop {
    pub fn new(core: CoreLoop, interval: Duration) -> Self {
        Self {
            core,
            interval,
            wake_rx: None,
        }
    }

    pub fn with_wake_source(mut self, wake_rx: mpsc::UnboundedReceiver<()>) -> Self {
        self.wake_rx = Some(wake_rx);
        self
    }

    pub fn watched(&self) -> &[WatchedPath] {
        self.core.watched()
    }

    pub fn core(&self) -> &CoreLoop {
        &self.core
    }

    /// Run cycles until `shutdown` resolves, then hand the core back.
    ///
    /// Shutdown is only honoured during the idle suspension; a cycle in
    /// progress always runs to completion.
    pub async fn run_until<F>(mut self, shutdown: F) -> CoreLoop
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        self.core.announce(self.interval);
        info!(interval = ?self.interval, "watch loop started");

        loop {
            self.core.run_cycle();

            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping watch loop");
                    break;
                }
                _ = self.idle() => {}
            }
        }

        self.core
    }

    /// Suspend for the poll interval, or less if a wake-up arrives first.
    async fn idle(&mut self) {
        let closed = match self.wake_rx.as_mut() {
            None => {
                sleep(self.interval).await;
                false
            }
            Some(rx) => {
                let full = sleep(self.interval);
                tokio::pin!(full);

                tokio::select! {
                    _ = &mut full => false,
                    msg = rx.recv() => match msg {
                        Some(()) => {
                            debug!("fs event received, waking early");
                            sleep(WAKE_DEBOUNCE.min(self.interval)).await;
                            while rx.try_recv().is_ok() {}
                            false
                        }
                        None => true,
                    },
                }
            }
        };

        if closed {
            warn!("fs event source closed, continuing with plain polling");
            self.wake_rx = None;
        }
    }
}
