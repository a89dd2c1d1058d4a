//! Event types delivered to mounted widgets

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// The event payload routed to components
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event (clicks and movement)
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// The position of a left-button press, if this is one.
    ///
    /// Left presses are the only events the outside-click registry observes,
    /// so routing loops use this to decide when to call
    /// [`OutsideClick::notify`](crate::OutsideClick::notify).
    pub fn as_left_click(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some((mouse.column, mouse.row))
            }
            _ => None,
        }
    }

    /// The position of a mouse movement, if this is one.
    pub fn as_mouse_move(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Moved => {
                Some((mouse.column, mouse.row))
            }
            _ => None,
        }
    }

    /// Whether this is an Escape key press.
    pub fn is_escape(&self) -> bool {
        matches!(self, EventKind::Key(key) if key.code == KeyCode::Esc)
    }
}

/// Check whether a cell position falls inside an area.
///
/// Zero-sized areas contain nothing, so a widget that has not rendered yet
/// never swallows a click.
pub fn point_in_area(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{esc_key, mouse_down, mouse_move};

    #[test]
    fn test_left_click_position() {
        let event = mouse_down(4, 2);
        assert_eq!(event.as_left_click(), Some((4, 2)));
        assert_eq!(event.as_mouse_move(), None);
    }

    #[test]
    fn test_mouse_move_position() {
        let event = mouse_move(7, 1);
        assert_eq!(event.as_mouse_move(), Some((7, 1)));
        assert_eq!(event.as_left_click(), None);
    }

    #[test]
    fn test_escape_detection() {
        assert!(EventKind::Key(esc_key()).is_escape());
        assert!(!mouse_down(0, 0).is_escape());
    }

    #[test]
    fn test_point_in_area() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(point_in_area(area, 2, 3));
        assert!(point_in_area(area, 5, 4));
        assert!(!point_in_area(area, 6, 4));
        assert!(!point_in_area(area, 2, 5));
        assert!(!point_in_area(Rect::ZERO, 0, 0));
    }
}
