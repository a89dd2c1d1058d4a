//! Test utilities for dropdown widgets
//!
//! - Key and mouse event constructors ([`esc_key`], [`char_key`],
//!   [`mouse_down`], [`mouse_move`])
//! - [`RenderHarness`]: render into a ratatui test backend and dump the
//!   buffer as plain text
//! - [`TestHarness`]: action channel plus state for exercising reducers
//! - `assert_emitted!` / `assert_not_emitted!` macros
//!
//! With the `testing-time` feature, tokio's clock can be paused and advanced
//! to exercise the 1000ms hover auto-close deterministically.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};
use tokio::sync::mpsc;

use crate::event::EventKind;
use crate::Action;

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
}

/// Create an Escape `KeyEvent`.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())
}

/// Create an Enter `KeyEvent`.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
}

/// Wrap a `KeyEvent` into an [`EventKind`].
pub fn into_event(key: KeyEvent) -> EventKind {
    EventKind::Key(key)
}

/// Create a left mouse-button press at a cell position.
pub fn mouse_down(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// Create a mouse movement to a cell position.
pub fn mouse_move(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// Dump a buffer as plain text, one line per row, styling stripped.
pub fn buffer_to_string_plain(buf: &Buffer) -> String {
    let area = *buf.area();
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Render harness over ratatui's [`TestBackend`].
///
/// # Example
///
/// ```ignore
/// let mut harness = RenderHarness::new(30, 10);
/// let output = harness.render_to_string_plain(|frame| {
///     widget.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("Pick"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("failed to create test terminal");
        Self { terminal }
    }

    /// Render one frame and return the buffer as plain text.
    pub fn render_to_string_plain(&mut self, f: impl FnOnce(&mut Frame<'_>)) -> String {
        self.terminal.draw(f).expect("draw failed");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Generic test harness: state under test plus an action channel.
///
/// # Example
///
/// ```ignore
/// let mut harness = TestHarness::<AppState, AppAction>::new(AppState::default());
/// harness.emit(AppAction::MenuToggle);
/// let actions = harness.drain_emitted();
/// assert_emitted!(actions, AppAction::MenuToggle);
/// ```
pub struct TestHarness<S, A: Action> {
    /// The application state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Get a clone of the action sender for passing to timers and registries.
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Check if any actions were emitted.
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Pause tokio's clock (requires the `testing-time` feature).
#[cfg(feature = "testing-time")]
pub fn pause_time() {
    tokio::time::pause();
}

/// Resume tokio's clock (requires the `testing-time` feature).
#[cfg(feature = "testing-time")]
pub fn resume_time() {
    tokio::time::resume();
}

/// Advance tokio's paused clock (requires the `testing-time` feature).
#[cfg(feature = "testing-time")]
pub async fn advance_time(duration: std::time::Duration) {
    tokio::time::advance(duration).await;
}

/// Assert that a specific action was emitted.
///
/// # Example
///
/// ```ignore
/// let actions = harness.drain_emitted();
/// assert_emitted!(actions, Action::MenuClose);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
///
/// # Example
///
/// ```ignore
/// let actions = harness.drain_emitted();
/// assert_not_emitted!(actions, Action::Execute(_));
/// ```
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_constructors() {
        assert_eq!(char_key('q').code, KeyCode::Char('q'));
        assert_eq!(esc_key().code, KeyCode::Esc);
        assert_eq!(enter_key().code, KeyCode::Enter);
    }

    #[test]
    fn test_mouse_constructors() {
        assert_eq!(mouse_down(3, 4).as_left_click(), Some((3, 4)));
        assert_eq!(mouse_move(5, 6).as_mouse_move(), Some((5, 6)));
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Foo,
        Bar(i32),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Foo => "Foo",
                TestAction::Bar(_) => "Bar",
            }
        }
    }

    #[test]
    fn test_harness_emit_and_drain() {
        let mut harness = TestHarness::<(), TestAction>::new(());

        harness.emit(TestAction::Foo);
        harness.emit(TestAction::Bar(42));

        let actions = harness.drain_emitted();
        assert_eq!(actions, vec![TestAction::Foo, TestAction::Bar(42)]);

        // Drain again should be empty
        assert!(harness.drain_emitted().is_empty());
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Foo, TestAction::Bar(42)];

        assert_emitted!(actions, TestAction::Foo);
        assert_emitted!(actions, TestAction::Bar(_));
        assert_not_emitted!(actions, TestAction::Bar(99));
    }

    #[test]
    fn test_render_harness_plain_dump() {
        let mut harness = RenderHarness::new(10, 2);
        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(ratatui::widgets::Paragraph::new("hello"), frame.area());
        });
        assert!(output.contains("hello"));
        assert_eq!(output.lines().count(), 2);
    }
}
