//! Accessibility metadata emitted by dropdown triggers

/// Accessibility attributes for one trigger control.
///
/// The terminal has no ARIA tree, so widgets expose this descriptor for
/// hosts that bridge to a screen reader: the popup-capability flag, the
/// expanded/collapsed state tied to the menu, the id linking trigger and
/// list, and the Selected trigger's voice label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessibility {
    /// The control opens a popup menu
    pub has_popup: bool,
    /// Whether the menu is currently expanded
    pub expanded: bool,
    /// Id of the menu this trigger controls
    pub controls: String,
    /// Accessible voice label for glyph-only triggers
    pub voice_label: Option<String>,
}
