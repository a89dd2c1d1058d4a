//! Core traits and types for tui-dropdown
//!
//! This crate provides the interaction plumbing shared by the dropdown
//! widget variants: the open/close state machine, the hover auto-close
//! timer, and the outside-click listener registry, wired together through
//! an action channel in a Redux/Elm-inspired loop.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe state changes
//! - **Component**: Pure UI elements that render based on props
//! - **InteractionState**: Open/closed state plus the hover auto-close timer
//! - **OutsideClick**: Click-outside-to-close listener registry with scoped
//!   registration guards
//!
//! # The interaction loop
//!
//! The driving loop delivers each input event to mounted components,
//! collects the actions they emit, forwards left mouse-downs to the
//! outside-click registry, dispatches everything to the reducer, and
//! re-renders before processing the next input. Timer firings arrive on the
//! same action channel.
//!
//! ```ignore
//! use tui_dropdown_core::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     MenuToggle,
//!     MenuClose,
//!     MenuHoverEnter,
//!     MenuHoverLeave,
//!     MenuHoverTimeout,
//! }
//!
//! struct AppState {
//!     menu: InteractionState<AppAction>,
//! }
//!
//! fn reducer(state: &mut AppState, action: AppAction) -> bool {
//!     match action {
//!         AppAction::MenuToggle => state.menu.trigger(),
//!         AppAction::MenuClose => state.menu.close(),
//!         AppAction::MenuHoverEnter => state.menu.hover_enter(),
//!         AppAction::MenuHoverLeave => state.menu.hover_leave(),
//!         AppAction::MenuHoverTimeout => state.menu.timeout_close(),
//!     }
//!     true
//! }
//! ```

pub mod action;
pub mod component;
pub mod error;
pub mod event;
pub mod outside;
pub mod poll;
pub mod state;
pub mod store;
pub mod testing;
pub mod timer;

// Core trait exports
pub use action::Action;
pub use component::Component;

// Event system exports
pub use event::{point_in_area, EventKind};
pub use poll::{process_raw_event, spawn_event_poller, RawEvent};

// Interaction exports
pub use error::ConfigError;
pub use outside::{ListenerId, OutsideClick, OutsideClickGuard};
pub use state::InteractionState;
pub use store::{Reducer, Store};
pub use timer::{CloseTimer, HOVER_CLOSE_DELAY};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_to_string_plain, char_key, enter_key, esc_key, into_event, mouse_down, mouse_move,
    RenderHarness, TestHarness,
};

#[cfg(feature = "testing-time")]
pub use testing::{advance_time, pause_time, resume_time};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::error::ConfigError;
    pub use crate::event::{point_in_area, EventKind};
    pub use crate::outside::{ListenerId, OutsideClick, OutsideClickGuard};
    pub use crate::poll::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::state::InteractionState;
    pub use crate::store::{Reducer, Store};
    pub use crate::timer::{CloseTimer, HOVER_CLOSE_DELAY};

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
