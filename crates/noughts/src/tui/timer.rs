//! Cancellable deferred callbacks for the event loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::app::Deferred;

/// Runs at most one pending [`Deferred`] action at a time.
///
/// Starting a new one or cancelling aborts whatever was pending.
#[derive(Debug)]
pub struct Timer {
    tx: mpsc::UnboundedSender<Deferred>,
    pending: Option<JoinHandle<()>>,
}

impl Timer {
    /// Creates a timer that delivers elapsed actions to `tx`.
    pub fn new(tx: mpsc::UnboundedSender<Deferred>) -> Self {
        Self { tx, pending: None }
    }

    /// Schedules `deferred` after `delay`, replacing any pending action.
    pub fn start(&mut self, deferred: Deferred, delay: Duration) {
        self.cancel();
        debug!(?deferred, ?delay, "Scheduling deferred action");
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the loop already exited.
            let _ = tx.send(deferred);
        }));
    }

    /// Aborts the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}
