//! Dropdown button with immediately-executing menu items

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};
use tui_dropdown_core::{point_in_area, Component, ConfigError, EventKind};

use crate::a11y::Accessibility;
use crate::menu_item::MenuItem;

const GLYPH_CLOSED: &str = "▾";
const GLYPH_OPEN: &str = "▴";

/// Props for ImmediateDropdown
pub struct ImmediateDropdownProps<'a, A> {
    /// Menu entries; an empty slice renders an empty list, not an error
    pub items: &'a [MenuItem<'a, A>],
    /// Whether the menu is open (from the widget's `InteractionState`)
    pub is_open: bool,
    /// Action for a trigger click
    pub on_toggle: fn() -> A,
    /// Action for Escape while open
    pub on_close: fn() -> A,
    /// Action when the pointer enters the widget footprint
    pub on_hover_enter: fn() -> A,
    /// Action when the pointer leaves the widget footprint
    pub on_hover_leave: fn() -> A,
}

/// A button that opens a menu of immediately-executing actions
///
/// The trigger always renders (label plus a directional glyph that flips
/// with the open state); the item list renders only while open. Clicking a
/// row invokes that item's own `on_activate` - the widget does not
/// intercept item clicks. Hovering the trigger or the open list cancels the
/// pending auto-close; leaving either starts the 1000ms timer (both via the
/// hover actions routed to `InteractionState`).
pub struct ImmediateDropdown {
    label: Line<'static>,
    id: String,
    style: Style,
    inline: bool,
    /// Areas recorded by the last render, for hit-testing
    trigger_area: Rect,
    list_area: Rect,
    rows_area: Rect,
    area: Rect,
    /// Whether the pointer was inside the footprint at the last move
    inside: bool,
}

impl ImmediateDropdown {
    /// Create a dropdown with the given trigger label and widget id.
    ///
    /// Both are required: an empty label or id is a configuration error.
    pub fn new(
        label: impl Into<Line<'static>>,
        id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let label = label.into();
        if label.width() == 0 {
            return Err(ConfigError::EmptyLabel);
        }
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyId);
        }
        Ok(Self {
            label,
            id,
            style: Style::default(),
            inline: false,
            trigger_area: Rect::ZERO,
            list_area: Rect::ZERO,
            rows_area: Rect::ZERO,
            area: Rect::ZERO,
            inside: false,
        })
    }

    /// Additional styling for the trigger.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Render as a single borderless line instead of a bordered button.
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// The widget id linking trigger and menu.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Footprint of the last render, for `OutsideClickGuard::set_area`.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Trigger area of the last render.
    pub fn trigger_area(&self) -> Rect {
        self.trigger_area
    }

    /// List area of the last render; zero while closed.
    pub fn list_area(&self) -> Rect {
        self.list_area
    }

    /// Accessibility attributes for the trigger.
    pub fn accessibility(&self, is_open: bool) -> Accessibility {
        Accessibility {
            has_popup: true,
            expanded: is_open,
            controls: format!("{}-menu", self.id),
            voice_label: None,
        }
    }

    fn hover_transition<A>(
        &mut self,
        column: u16,
        row: u16,
        is_open: bool,
        on_enter: fn() -> A,
        on_leave: fn() -> A,
    ) -> Option<A> {
        let inside = point_in_area(self.trigger_area, column, row)
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

impl<A> Component<A> for ImmediateDropdown {
    type Props<'a> = ImmediateDropdownProps<'a, A> where A: 'a;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
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
                    if point_in_area(self.trigger_area, column, row) {
                        Some((props.on_toggle)())
                    } else if props.is_open && point_in_area(self.rows_area, column, row) {
                        // Item rows own their activation behavior
                        let idx = (row - self.rows_area.y) as usize;
                        props
                            .items
                            .get(idx)
                            .and_then(|item| item.on_activate)
                            .map(|action_fn| action_fn())
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
        let trigger_height = if self.inline { 1 } else { 3 };
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

        let [trigger_area, list_area, _] = Layout::vertical([
            Constraint::Length(trigger_height),
            Constraint::Length(list_height),
            Constraint::Fill(1),
        ])
        .areas(area);

        let glyph = if props.is_open { GLYPH_OPEN } else { GLYPH_CLOSED };
        let mut spans = self.label.spans.clone();
        spans.push(Span::raw(format!(" {glyph}")));
        let trigger = Paragraph::new(Line::from(spans)).style(self.style);
        let trigger = if self.inline {
            trigger
        } else {
            trigger.block(Block::bordered())
        };
        frame.render_widget(trigger, trigger_area);
        self.trigger_area = trigger_area;

        if props.is_open {
            let rows: Vec<ListItem<'_>> = props
                .items
                .iter()
                .map(|item| ListItem::new(item.content.clone()))
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
            self.area = trigger_area.union(list_area);
        } else {
            self.list_area = Rect::ZERO;
            self.rows_area = Rect::ZERO;
            self.area = trigger_area;
        }
    }
}
