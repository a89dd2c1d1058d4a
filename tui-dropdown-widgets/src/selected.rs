//! Composite split button with a selectable menu

use std::collections::HashMap;

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};
use tui_dropdown_core::{point_in_area, Component, ConfigError, EventKind};

use crate::a11y::Accessibility;
use crate::menu_item::MenuItem;

const GLYPH_CLOSED: &str = "▾";
const GLYPH_OPEN: &str = "▴";

/// Props for SelectedDropdown
pub struct SelectedDropdownProps<'a, A> {
    /// Menu entries; each id should have an entry in the labels map
    pub items: &'a [MenuItem<'a, A>],
    /// Whether the menu is open (from the widget's `InteractionState`)
    pub is_open: bool,
    /// Action for an execute-segment click, carrying the current selection
    pub on_execute: fn(String) -> A,
    /// Action for a trigger-segment click
    pub on_toggle: fn() -> A,
    /// Action for Escape while open
    pub on_close: fn() -> A,
    /// Action when the pointer enters the widget footprint
    pub on_hover_enter: fn() -> A,
    /// Action when the pointer leaves the widget footprint
    pub on_hover_leave: fn() -> A,
}

impl<'a, A> SelectedDropdownProps<'a, A> {
    /// Fail fast on a widget mounted without any selectable items.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        Ok(())
    }
}

/// A two-zone composite button: an execute segment showing the current
/// selection's label, and a trigger segment toggling the menu.
///
/// Clicking an open list row sets the selection to that row's id: the
/// execute segment relabels immediately, the menu stays open, and nothing
/// executes. Caller `on_activate` handlers on items are overridden by the
/// selection handler and never invoked. Clicking the execute segment emits
/// `on_execute` with the current selection and never opens or closes the
/// menu.
///
/// The selection initializes to the first supplied item and persists across
/// open/close cycles. A selection whose id has no labels entry renders an
/// empty execute segment (caller contract; ids and labels are not
/// cross-validated).
pub struct SelectedDropdown {
    labels: HashMap<String, Line<'static>>,
    id: String,
    voice_label: String,
    style: Style,
    inline: bool,
    selected: Option<String>,
    /// Areas recorded by the last render, for hit-testing
    execute_area: Rect,
    trigger_area: Rect,
    list_area: Rect,
    rows_area: Rect,
    area: Rect,
    /// Whether the pointer was inside the footprint at the last move
    inside: bool,
}

impl SelectedDropdown {
    /// Create a split button.
    ///
    /// `labels` maps item ids to execute-segment display content and must
    /// not be empty; `id` and `voice_label` (the accessible name of the
    /// glyph-only trigger segment) are required.
    pub fn new(
        labels: HashMap<String, Line<'static>>,
        id: impl Into<String>,
        voice_label: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if labels.is_empty() {
            return Err(ConfigError::EmptyLabels);
        }
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyId);
        }
        let voice_label = voice_label.into();
        if voice_label.trim().is_empty() {
            return Err(ConfigError::EmptyVoiceLabel);
        }
        Ok(Self {
            labels,
            id,
            voice_label,
            style: Style::default(),
            inline: false,
            selected: None,
            execute_area: Rect::ZERO,
            trigger_area: Rect::ZERO,
            list_area: Rect::ZERO,
            rows_area: Rect::ZERO,
            area: Rect::ZERO,
            inside: false,
        })
    }

    /// Additional styling for the composite button.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Render as borderless lines instead of bordered segments.
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// The widget id linking trigger and menu.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The currently selected item id, once items have been observed.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Footprint of the last render, for `OutsideClickGuard::set_area`.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Execute segment area of the last render.
    pub fn execute_area(&self) -> Rect {
        self.execute_area
    }

    /// Trigger segment area of the last render.
    pub fn trigger_area(&self) -> Rect {
        self.trigger_area
    }

    /// List area of the last render; zero while closed.
    pub fn list_area(&self) -> Rect {
        self.list_area
    }

    /// Accessibility attributes for the trigger segment.
    pub fn accessibility(&self, is_open: bool) -> Accessibility {
        Accessibility {
            has_popup: true,
            expanded: is_open,
            controls: format!("{}-menu", self.id),
            voice_label: Some(self.voice_label.clone()),
        }
    }

    /// Initialize the selection to the first item, before any interaction.
    fn ensure_selection<A>(&mut self, items: &[MenuItem<'_, A>]) {
        if self.selected.is_none() {
            self.selected = items.first().map(|item| item.id.to_string());
        }
    }

    fn execute_label(&self) -> Line<'static> {
        self.selected
            .as_ref()
            .and_then(|id| self.labels.get(id))
            .cloned()
            .unwrap_or_default()
    }

    fn hover_transition<A>(
        &mut self,
        column: u16,
        row: u16,
        is_open: bool,
        on_enter: fn() -> A,
        on_leave: fn() -> A,
    ) -> Option<A> {
        let inside = point_in_area(self.execute_area, column, row)
            || point_in_area(self.trigger_area, column, row)
            || (is_open && point_in_area(self.list_area, column, row));
        let action = match (self.inside, inside) {
            (false, true) => Some(on_enter()),
            (true, false) => Some(on_leave()),
            _ => None,
        };
        self.inside = inside;
        action
    }
}

impl<A> Component<A> for SelectedDropdown {
    type Props<'a> = SelectedDropdownProps<'a, A> where A: 'a;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.ensure_selection(props.items);

        match event {
            EventKind::Key(key) => {
                if key.code == KeyCode::Esc && props.is_open {
                    Some((props.on_close)())
                } else {
                    None
                }
            }
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let (column, row) = (mouse.column, mouse.row);
                    if point_in_area(self.execute_area, column, row) {
                        self.selected
                            .clone()
                            .map(|id| (props.on_execute)(id))
                    } else if point_in_area(self.trigger_area, column, row) {
                        Some((props.on_toggle)())
                    } else if props.is_open && point_in_area(self.rows_area, column, row) {
                        // Selection handler overrides any caller on_activate
                        let idx = (row - self.rows_area.y) as usize;
                        if let Some(item) = props.items.get(idx) {
                            self.selected = Some(item.id.to_string());
                        }
                        None
                    } else {
                        None
                    }
                }
                MouseEventKind::Moved => self.hover_transition(
                    mouse.column,
                    mouse.row,
                    props.is_open,
                    props.on_hover_enter,
                    props.on_hover_leave,
                ),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.ensure_selection(props.items);

        let button_height = if self.inline { 1 } else { 3 };
        let trigger_width = if self.inline { 3 } else { 5 };
        let list_height = if props.is_open {
            let rows = props.items.len() as u16;
            if self.inline {
                rows
            } else {
                rows.saturating_add(2)
            }
        } else {
            0
        };

        let [button_area, list_area, _] = Layout::vertical([
            Constraint::Length(button_height),
            Constraint::Length(list_height),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [execute_area, trigger_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(trigger_width)])
                .areas(button_area);

        let execute = Paragraph::new(self.execute_label()).style(self.style);
        let execute = if self.inline {
            execute
        } else {
            execute.block(Block::bordered())
        };
        frame.render_widget(execute, execute_area);

        let glyph = if props.is_open { GLYPH_OPEN } else { GLYPH_CLOSED };
        let trigger = Paragraph::new(glyph)
            .alignment(Alignment::Center)
            .style(self.style);
        let trigger = if self.inline {
            trigger
        } else {
            trigger.block(Block::bordered())
        };
        frame.render_widget(trigger, trigger_area);

        self.execute_area = execute_area;
        self.trigger_area = trigger_area;

        if props.is_open {
            let rows: Vec<ListItem<'_>> = props
                .items
                .iter()
                .map(|item| {
                    let row = ListItem::new(item.content.clone());
                    if self.selected.as_deref() == Some(item.id) {
                        row.style(Style::default().add_modifier(Modifier::BOLD))
                    } else {
                        row
                    }
                })
                .collect();
            let list = List::new(rows);
            if self.inline {
                self.rows_area = list_area;
                frame.render_widget(list, list_area);
            } else {
                let block = Block::bordered();
                self.rows_area = block.inner(list_area);
                frame.render_widget(list.block(block), list_area);
            }
            self.list_area = list_area;
            self.area = button_area.union(list_area);
        } else {
            self.list_area = Rect::ZERO;
            self.rows_area = Rect::ZERO;
            self.area = button_area;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dropdown_core::testing::{esc_key, into_event, mouse_down, mouse_move, RenderHarness};

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Execute(String),
        Toggle,
        Close,
        HoverEnter,
        HoverLeave,
        CallerHandler,
    }

    fn make_labels() -> HashMap<String, Line<'static>> {
        HashMap::from([
            ("a".to_string(), Line::from("Alpha")),
            ("b".to_string(), Line::from("Beta")),
        ])
    }

    fn make_widget() -> SelectedDropdown {
        SelectedDropdown::new(make_labels(), "run1", "choose run mode")
            .expect("valid config")
            .inline(true)
    }

    fn make_items() -> Vec<MenuItem<'static, TestAction>> {
        vec![MenuItem::new("a", "Alpha"), MenuItem::new("b", "Beta")]
    }

    fn props<'a>(
        items: &'a [MenuItem<'a, TestAction>],
        is_open: bool,
    ) -> SelectedDropdownProps<'a, TestAction> {
        SelectedDropdownProps {
            items,
            is_open,
            on_execute: TestAction::Execute,
            on_toggle: || TestAction::Toggle,
            on_close: || TestAction::Close,
            on_hover_enter: || TestAction::HoverEnter,
            on_hover_leave: || TestAction::HoverLeave,
        }
    }

    fn render(
        widget: &mut SelectedDropdown,
        items: &[MenuItem<'_, TestAction>],
        open: bool,
    ) -> String {
        let mut harness = RenderHarness::new(20, 6);
        harness.render_to_string_plain(|frame| {
            widget.render(frame, frame.area(), props(items, open));
        })
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            SelectedDropdown::new(HashMap::new(), "run1", "voice").err(),
            Some(ConfigError::EmptyLabels)
        );
        assert_eq!(
            SelectedDropdown::new(make_labels(), "", "voice").err(),
            Some(ConfigError::EmptyId)
        );
        assert_eq!(
            SelectedDropdown::new(make_labels(), "run1", " ").err(),
            Some(ConfigError::EmptyVoiceLabel)
        );
    }

    #[test]
    fn test_props_validation() {
        let items = make_items();
        assert!(props(&items, false).validate().is_ok());

        let empty: Vec<MenuItem<'_, TestAction>> = Vec::new();
        assert_eq!(props(&empty, false).validate().err(), Some(ConfigError::NoItems));
    }

    #[test]
    fn test_initial_selection_is_first_item() {
        let mut widget = make_widget();
        let items = make_items();
        let output = render(&mut widget, &items, false);

        assert_eq!(widget.selected(), Some("a"));
        assert!(output.contains("Alpha"));
        assert!(output.contains("▾"));
    }

    #[test]
    fn test_selecting_item_relabels_without_closing_or_executing() {
        let mut widget = make_widget();
        let items = make_items();
        render(&mut widget, &items, true);

        // Activate item "b" (second list row)
        let actions: Vec<_> = widget
            .handle_event(&mouse_down(2, 2), props(&items, true))
            .into_iter()
            .collect();

        assert!(actions.is_empty(), "selection emits no actions: {actions:?}");
        assert_eq!(widget.selected(), Some("b"));

        let output = render(&mut widget, &items, true);
        assert!(output.contains("Beta"));
    }

    #[test]
    fn test_selection_persists_across_open_close() {
        let mut widget = make_widget();
        let items = make_items();
        render(&mut widget, &items, true);
        widget.handle_event(&mouse_down(2, 2), props(&items, true));

        render(&mut widget, &items, false);
        render(&mut widget, &items, true);
        assert_eq!(widget.selected(), Some("b"));
    }

    #[test]
    fn test_execute_click_carries_current_selection() {
        let mut widget = make_widget();
        let items = make_items();
        render(&mut widget, &items, true);
        widget.handle_event(&mouse_down(2, 2), props(&items, true));
        render(&mut widget, &items, true);

        let actions: Vec<_> = widget
            .handle_event(&mouse_down(1, 0), props(&items, true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Execute("b".to_string())]);
    }

    #[test]
    fn test_trigger_segment_toggles() {
        let mut widget = make_widget();
        let items = make_items();
        render(&mut widget, &items, false);

        // Inline layout: trigger segment is the last 3 columns of row 0
        let actions: Vec<_> = widget
            .handle_event(&mouse_down(18, 0), props(&items, false))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Toggle]);
    }

    #[test]
    fn test_caller_item_handler_is_overridden() {
        let mut widget = make_widget();
        let items = vec![
            MenuItem::new("a", "Alpha").on_activate(|| TestAction::CallerHandler),
            MenuItem::new("b", "Beta").on_activate(|| TestAction::CallerHandler),
        ];
        render(&mut widget, &items, true);

        let actions: Vec<_> = widget
            .handle_event(&mouse_down(2, 1), props(&items, true))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
        assert_eq!(widget.selected(), Some("a"));
    }

    #[test]
    fn test_unknown_selection_renders_empty_execute_segment() {
        let mut widget = make_widget();
        let items = make_items();
        render(&mut widget, &items, true);
        widget.handle_event(&mouse_down(2, 2), props(&items, true));

        // Caller removed item "b" and its label between renders
        let remaining = vec![MenuItem::<'_, TestAction>::new("a", "Alpha")];
        let mut narrowed = SelectedDropdown::new(
            HashMap::from([("a".to_string(), Line::from("Alpha"))]),
            "run1",
            "choose run mode",
        )
        .expect("valid config")
        .inline(true);
        narrowed.selected = Some("b".to_string());

        let output = render(&mut narrowed, &remaining, false);
        assert!(!output.contains("Alpha"));
        assert_eq!(narrowed.selected(), Some("b"));
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let mut widget = make_widget();
        let items = make_items();
        render(&mut widget, &items, true);

        let actions: Vec<_> = widget
            .handle_event(&into_event(esc_key()), props(&items, true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Close]);

        let actions: Vec<_> = widget
            .handle_event(&into_event(esc_key()), props(&items, false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_hover_transitions_cover_whole_composite() {
        let mut widget = make_widget();
        let items = make_items();
        render(&mut widget, &items, true);

        let actions: Vec<_> = widget
            .handle_event(&mouse_move(18, 0), props(&items, true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::HoverEnter]);

        let actions: Vec<_> = widget
            .handle_event(&mouse_move(1, 5), props(&items, true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::HoverLeave]);
    }

    #[test]
    fn test_accessibility_carries_voice_label() {
        let widget = make_widget();
        let a11y = widget.accessibility(false);
        assert!(a11y.has_popup);
        assert!(!a11y.expanded);
        assert_eq!(a11y.controls, "run1-menu");
        assert_eq!(a11y.voice_label.as_deref(), Some("choose run mode"));
    }
}
