//! tui-dropdown: dropdown button widgets for ratatui apps
//!
//! Two widget variants over one shared interaction unit: an Immediate menu
//! of self-executing action items, and a Selected split button whose menu
//! picks the value the execute segment acts on. Open/close, Escape,
//! click-outside-to-close, and hover auto-close all flow through a
//! Redux-style action loop.
//!
//! # Example
//!
//! ```ignore
//! use tui_dropdown::prelude::*;
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
//! ```

// Re-export everything from core
pub use tui_dropdown_core::*;

// Re-export the widgets
pub use tui_dropdown_widgets::{
    Accessibility, ImmediateDropdown, ImmediateDropdownProps, MenuItem, SelectedDropdown,
    SelectedDropdownProps,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use tui_dropdown_core::prelude::*;
    pub use tui_dropdown_widgets::prelude::*;
}
