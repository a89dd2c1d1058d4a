//! Configuration errors
//!
//! Caller misconfiguration is a contract violation caught at construction,
//! not a runtime fault: interaction handlers are total and never fail.

use thiserror::Error;

/// Errors raised when a widget is constructed with invalid configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The trigger label resolved to empty content.
    #[error("dropdown trigger label must not be empty")]
    EmptyLabel,

    /// The widget id is empty; it links the trigger to its menu.
    #[error("dropdown id must not be empty")]
    EmptyId,

    /// The Selected variant's accessible voice label is empty.
    #[error("selected dropdown voice label must not be empty")]
    EmptyVoiceLabel,

    /// The Selected variant's id-to-label map is empty.
    #[error("selected dropdown requires a non-empty labels map")]
    EmptyLabels,

    /// A widget that requires menu items was given none.
    #[error("dropdown requires at least one menu item")]
    NoItems,
}
