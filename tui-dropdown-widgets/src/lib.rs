//! Dropdown button widgets for tui-dropdown
//!
//! Two sibling widgets built on the shared interaction state in
//! `tui-dropdown-core`:
//!
//! - [`ImmediateDropdown`] - a button opening a menu of
//!   immediately-executing action items
//! - [`SelectedDropdown`] - a composite split button whose menu selects an
//!   item, relabeling the execute segment until the execute click fires
//!
//! Both implement the `Component<A>` trait: the host passes [`MenuItem`]s
//! and action constructors through props, hit-testing happens against the
//! areas recorded by the last render, and open/closed state lives in the
//! host's `InteractionState`.
//!
//! # Example
//!
//! ```ignore
//! use tui_dropdown_widgets::{ImmediateDropdown, ImmediateDropdownProps, MenuItem};
//!
//! let mut menu = ImmediateDropdown::new("File", "file-menu")?;
//! let items = [
//!     MenuItem::new("new", "New").on_activate(|| Action::FileNew),
//!     MenuItem::new("open", "Open").on_activate(|| Action::FileOpen),
//! ];
//! menu.render(frame, area, ImmediateDropdownProps {
//!     items: &items,
//!     is_open: state.file_menu.is_open(),
//!     on_toggle: || Action::FileToggle,
//!     on_close: || Action::FileClose,
//!     on_hover_enter: || Action::FileHoverEnter,
//!     on_hover_leave: || Action::FileHoverLeave,
//! });
//! ```

mod a11y;
mod immediate;
mod menu_item;
mod selected;

pub use a11y::Accessibility;
pub use immediate::{ImmediateDropdown, ImmediateDropdownProps};
pub use menu_item::MenuItem;
pub use selected::{SelectedDropdown, SelectedDropdownProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Accessibility, ImmediateDropdown, ImmediateDropdownProps, MenuItem, SelectedDropdown,
        SelectedDropdownProps,
    };
}
