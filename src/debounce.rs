//! Debounced query input.
//!
//! Raw keystroke-rate text goes in; a settled term comes out once no new
//! value has arrived for a full quiet interval. Trailing-edge only: every
//! new value supersedes the pending one and restarts the timer.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Quiet interval before a pending value settles.
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(300);

/// Handle feeding raw input values to the debounce worker.
///
/// The worker task is owned by this handle and aborted on drop, so a value
/// still waiting out its quiet interval at teardown is discarded and nothing
/// is ever emitted afterward.
pub struct DebouncedInput {
    raw: UnboundedSender<String>,
    worker: JoinHandle<()>,
}

impl DebouncedInput {
    /// Spawn a debounce worker with the default quiet interval.
    pub fn spawn() -> (Self, UnboundedReceiver<String>) {
        Self::with_quiet_interval(DEFAULT_QUIET_INTERVAL)
    }

    pub fn with_quiet_interval(quiet: Duration) -> (Self, UnboundedReceiver<String>) {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel::<String>();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(async move {
            while let Some(mut pending) = raw_rx.recv().await {
                loop {
                    tokio::select! {
                        next = raw_rx.recv() => match next {
                            Some(value) => pending = value,
                            // Input side closed mid-wait: the pending value
                            // is discarded, not flushed.
                            None => return,
                        },
                        _ = sleep(quiet) => {
                            if settled_tx.send(pending).is_err() {
                                return;
                            }
                            break;
                        }
                    }
                }
            }
        });

        (
            Self {
                raw: raw_tx,
                worker,
            },
            settled_rx,
        )
    }

    /// Feed one raw value. The exact latest value is what eventually settles;
    /// no trimming or normalization happens here.
    pub fn submit(&self, value: impl Into<String>) {
        let _ = self.raw.send(value.into());
    }
}

impl Drop for DebouncedInput {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
