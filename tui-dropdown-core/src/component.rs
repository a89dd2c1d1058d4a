//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders based on props and emits actions
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data needed for rendering
/// 2. `handle_event` returns actions, never mutates external state
/// 3. `render` is a pure function of props (plus internal UI state like
///    recorded hit areas or the current selection)
///
/// Internal UI state (hover tracking, last rendered areas, the Selected
/// variant's current item) can be stored in `&mut self`, but mutations of
/// application state must go through actions.
///
/// # Example
///
/// ```ignore
/// use tui_dropdown_core::{Component, EventKind, Frame, Rect};
///
/// struct Badge;
///
/// struct BadgeProps {
///     count: usize,
/// }
///
/// impl Component<AppAction> for Badge {
///     type Props<'a> = BadgeProps;
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("{} open", props.count);
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>
    where
        A: 'a;

    /// Handle an event and return actions to dispatch
    ///
    /// Components receive the raw `EventKind` (key press, mouse event, resize)
    /// and hit-test mouse events against the areas recorded by their last
    /// `render` call.
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `[a, b]` or `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
