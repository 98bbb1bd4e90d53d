//! # reaction-viewer
//!
//! A standalone, reusable source-file viewer widget with syntax highlighting
//! and per-line emoji reactions, persisted per viewer through a
//! host-provided key/value store.
//!
//! ## Design Principles
//!
//! This crate is designed to be **instrumented** — it receives data and emits
//! events without directly calling external APIs. This enables:
//!
//! - Testability without mocking host transports
//! - Reusability in different hosts (desktop TUI, code review tool, editor)
//! - Clear separation of concerns
//!
//! ## Action-Based Architecture
//!
//! The viewer uses a tagged action pattern. Instead of handling key events
//! directly, the orchestrating application maps key events to
//! [`ViewerAction`] variants and dispatches them to the viewer state. This
//! allows integration with any key handling system.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reaction_viewer::{
//!     FileViewer, ReactionStoreAdapter, ReactionViewerState, SourceFile,
//!     SourceHighlighter, ViewerAction,
//! };
//! use reaction_viewer::traits::DefaultTheme;
//!
//! // Create state from the file content the host supplies
//! let mut state = ReactionViewerState::new(SourceFile::new(path, &content));
//!
//! // The two initialization requests may resolve in either order
//! state.set_username(identity.current_user().await?);
//! state.set_reactions(adapter.load(path).await);
//!
//! // Render the widget
//! let widget = FileViewer::new(&mut highlighter, &theme);
//! frame.render_stateful_widget(widget, area, &mut state);
//!
//! // Handle actions (mapped from key events by the orchestrator)
//! let events = state.handle_action(ViewerAction::ToggleReaction);
//! for event in events {
//!     // Process ViewerEvent (e.g., persist the reaction map)
//! }
//! ```

pub mod action;
pub mod event;
pub mod highlight;
pub mod model;
pub mod state;
pub mod store;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::ViewerAction;
pub use event::ViewerEvent;
pub use highlight::SourceHighlighter;
pub use model::{
    visible_options, FileReactions, HighlightedSpan, LineReactions, SourceFile, Username,
    EMOJI_OPTIONS,
};
pub use state::{DisplayRow, ReactionViewerState, PLACEHOLDER_USER};
pub use store::ReactionStoreAdapter;
pub use traits::{
    DefaultTheme, IdentityError, IdentityProvider, KeyValueStore, MemoryStore,
    NoOpIdentityProvider, NoOpKeyValueStore, StoreError, ThemeProvider,
};
pub use widget::{FileViewer, FooterHint, ReactionRow};
