//! Delayed-close timer for hover auto-close
//!
//! At most one timer is live per widget instance: scheduling cancels any
//! pending task before spawning a new one, so cancel-then-reschedule is
//! atomic from the UI loop's perspective.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::Action;

/// Delay before an unhovered open menu closes itself.
pub const HOVER_CLOSE_DELAY: Duration = Duration::from_millis(1000);

/// A single pending delayed-close operation.
///
/// The timer sends its action through the action channel when it fires;
/// the driving loop dispatches it like any other action. Dropping the
/// timer aborts any pending task, so no close action outlives its widget.
pub struct CloseTimer<A> {
    action_tx: mpsc::UnboundedSender<A>,
    handle: Option<AbortHandle>,
}

impl<A> CloseTimer<A>
where
    A: Action,
{
    /// Create a timer that delivers its action on `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            action_tx,
            handle: None,
        }
    }

    /// Schedule the action after `delay`, replacing any pending timer.
    ///
    /// If the task is cancelled before the delay elapses, no action is sent.
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, delay: Duration, action_fn: fn() -> A) {
        self.cancel();

        let tx = self.action_tx.clone();
        // Fix the deadline now, not at the task's first poll, so the delay
        // is measured from the schedule call.
        let deadline = tokio::time::Instant::now() + delay;
        let handle: JoinHandle<()> = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let action = action_fn();
            debug!(action = action.name(), "close timer fired");
            let _ = tx.send(action);
        });

        self.handle = Some(handle.abort_handle());
    }

    /// Cancel the pending timer and clear the handle.
    ///
    /// No-op when nothing is scheduled.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("close timer cancelled");
        }
    }

    /// Whether a timer handle is currently held.
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}

impl<A> Drop for CloseTimer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
