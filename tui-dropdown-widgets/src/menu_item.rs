//! Caller-supplied menu entries

use ratatui::text::Line;

/// One clickable entry rendered inside a dropdown list.
///
/// Items are caller-owned and borrowed per render; widgets read the id and
/// wrap the content into a list row without mutating anything. Ids must be
/// unique within one widget; on collision the first match wins.
pub struct MenuItem<'a, A> {
    /// Identifier, unique within the widget
    pub id: &'a str,
    /// Display content for the list row
    pub content: Line<'a>,
    /// The item's own activation behavior, if any
    ///
    /// Invoked by [`ImmediateDropdown`](crate::ImmediateDropdown) when the
    /// row is clicked. [`SelectedDropdown`](crate::SelectedDropdown)
    /// overrides this with its selection handler and never invokes it.
    pub on_activate: Option<fn() -> A>,
}

impl<'a, A> MenuItem<'a, A> {
    /// Create an item with no activation behavior of its own.
    pub fn new(id: &'a str, content: impl Into<Line<'a>>) -> Self {
        Self {
            id,
            content: content.into(),
            on_activate: None,
        }
    }

    /// Attach the item's own activation action.
    pub fn on_activate(mut self, action_fn: fn() -> A) -> Self {
        self.on_activate = Some(action_fn);
        self
    }
}
