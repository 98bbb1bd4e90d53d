//! Events emitted by the reaction viewer for the host application to handle.

use crate::model::FileReactions;

/// Events emitted by the reaction viewer widget.
///
/// The viewer is designed to be instrumented - it emits events instead of
/// performing side effects directly. The host application is responsible for
/// handling these events and performing the necessary actions (e.g.,
/// persisting the reaction map).
///
/// # Example
///
/// ```ignore
/// for event in state.handle_action(action) {
///     match event {
///         ViewerEvent::ReactionsChanged { path, reactions } => {
///             // Persist the full map, fire-and-forget.
///             runtime.spawn(async move { adapter.save(&path, &reactions).await });
///         }
///         ViewerEvent::SelectionChanged { path, line } => {
///             // Update the status bar.
///         }
///         ViewerEvent::Close => running = false,
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub enum ViewerEvent {
    /// The user toggled a reaction; the full map needs persisting.
    ReactionsChanged {
        /// File path, the persistence key.
        path: String,
        /// The new authoritative reaction map for the file.
        reactions: FileReactions,
    },

    /// Cursor moved (useful for status bar updates).
    SelectionChanged {
        /// Path of the viewed file.
        path: String,
        /// Cursor line, if the file has any lines.
        line: Option<usize>,
    },

    /// User wants to close the viewer.
    Close,
}
