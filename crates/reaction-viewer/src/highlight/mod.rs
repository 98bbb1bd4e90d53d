//! Syntax highlighting for the viewed file.

mod highlighter;

pub use highlighter::SourceHighlighter;
