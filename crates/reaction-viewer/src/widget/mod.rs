//! Ratatui widgets for the reaction viewer.

mod file_viewer;
mod reaction_row;

pub use file_viewer::{FileViewer, FooterHint};
pub use reaction_row::ReactionRow;
