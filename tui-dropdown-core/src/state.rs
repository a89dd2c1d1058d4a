//! Shared open/close interaction state for dropdown widgets
//!
//! Both widget variants own one `InteractionState` inside application state.
//! Widgets emit actions (toggle, close, hover enter/leave) and the reducer
//! routes them to the methods here; the driving loop re-renders after every
//! dispatch, so every transition is visible before the next input is
//! processed.
//!
//! The opening click never bounces the menu shut through the outside-click
//! registry: the registry only fires for points outside a widget's own
//! registered area, and the trigger is inside it (see [`crate::outside`]).
//! The same containment rule keeps a close confined to its own widget when
//! widgets overlap.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tracing::debug;

use crate::timer::{CloseTimer, HOVER_CLOSE_DELAY};
use crate::Action;

/// Open/closed state machine plus the hover auto-close timer.
///
/// Two states, no terminal state: `Closed` (initial) oscillates with `Open`
/// for the widget's whole lifetime. A freshly created unit is closed.
pub struct InteractionState<A> {
    open: bool,
    timer: CloseTimer<A>,
    on_timeout: fn() -> A,
}

impl<A> InteractionState<A>
where
    A: Action,
{
    /// Create a closed unit.
    ///
    /// `on_timeout` builds the action the hover timer delivers through
    /// `action_tx`; the reducer should route it to [`timeout_close`].
    ///
    /// [`timeout_close`]: InteractionState::timeout_close
    pub fn new(action_tx: mpsc::UnboundedSender<A>, on_timeout: fn() -> A) -> Self {
        Self {
            open: false,
            timer: CloseTimer::new(action_tx),
            on_timeout,
        }
    }

    /// Whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle open/closed.
    pub fn trigger(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "dropdown triggered");
    }

    /// Close the menu. Cancels no timer.
    pub fn close(&mut self) {
        self.open = false;
        debug!("dropdown closed");
    }

    /// Escape behaves exactly as [`close`]; all other keys are ignored.
    ///
    /// [`close`]: InteractionState::close
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if key.code == KeyCode::Esc {
            self.close();
        }
    }

    /// Pointer re-entered the widget: cancel any pending auto-close.
    pub fn hover_enter(&mut self) {
        self.timer.cancel();
    }

    /// Pointer left the widget: start a fresh auto-close timer.
    ///
    /// Any pending timer is replaced. Must be called from within a tokio
    /// runtime.
    pub fn hover_leave(&mut self) {
        self.timer.schedule(HOVER_CLOSE_DELAY, self.on_timeout);
    }

    /// Apply a fired auto-close: close and clear the timer reference.
    pub fn timeout_close(&mut self) {
        self.open = false;
        self.timer.cancel();
        debug!("dropdown auto-closed after hover timeout");
    }
}
