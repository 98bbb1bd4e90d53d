//! Data models for the reaction viewer.

mod reaction;
mod source;

pub use reaction::{visible_options, FileReactions, LineReactions, Username, EMOJI_OPTIONS};
pub use source::{HighlightedSpan, SourceFile};
