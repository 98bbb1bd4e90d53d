//! Reaction Viewer Actions
//!
//! Tagged actions that the viewer can process. These are exposed by the crate
//! so that the orchestrating application can transform key events into
//! actions and dispatch them to the viewer state.

/// Actions that can be performed on the reaction viewer.
///
/// These are the semantic actions the viewer understands. The orchestrating
/// application is responsible for mapping key events to these actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    // === Navigation ===
    /// Move cursor down one line
    CursorDown,
    /// Move cursor up one line
    CursorUp,
    /// Move to first line
    CursorFirst,
    /// Move to last line
    CursorLast,

    // === Scrolling ===
    /// Scroll down half page
    ScrollHalfDown,
    /// Scroll up half page
    ScrollHalfUp,
    /// Scroll down full page
    ScrollPageDown,
    /// Scroll up full page
    ScrollPageUp,

    // === Reaction Picker ===
    /// Move to the next emoji button in the picker
    PickerNext,
    /// Move to the previous emoji button in the picker
    PickerPrev,
    /// Toggle the currently selected emoji for the cursor line
    ToggleReaction,
    /// Toggle an emoji by its position in the fixed emoji list
    SelectEmoji(usize),

    // === General ===
    /// Close the viewer
    Close,

    // === Viewport ===
    /// Set the viewport dimensions (for scroll calculations)
    SetViewport { width: u16, height: u16 },
}

impl ViewerAction {
    /// Check if this action is a navigation action
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            ViewerAction::CursorDown
                | ViewerAction::CursorUp
                | ViewerAction::CursorFirst
                | ViewerAction::CursorLast
        )
    }

    /// Check if this action is a scroll action
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            ViewerAction::ScrollHalfDown
                | ViewerAction::ScrollHalfUp
                | ViewerAction::ScrollPageDown
                | ViewerAction::ScrollPageUp
        )
    }

    /// Check if this action operates on the reaction picker
    pub fn is_picker(&self) -> bool {
        matches!(
            self,
            ViewerAction::PickerNext
                | ViewerAction::PickerPrev
                | ViewerAction::ToggleReaction
                | ViewerAction::SelectEmoji(_)
        )
    }
}
