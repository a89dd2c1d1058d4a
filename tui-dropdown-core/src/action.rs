//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions dispatched by widgets and timers
///
/// Actions describe intents to change state. They should be:
/// - Clone: Actions may be logged or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: Timer tasks send them across the action channel
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}
