//! Source file model: the raw content handed over by the host, split into
//! render lines.

use ratatui::style::Color;

/// A file being viewed, as supplied by the host application.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File path, also the persistence key for this file's reactions.
    pub path: String,
    /// Materialized lines of the file content.
    lines: Vec<String>,

    /// Cached gutter width for line numbers.
    cached_line_no_width: Option<usize>,
}

impl SourceFile {
    /// Create a source file from raw content.
    pub fn new(path: impl Into<String>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.lines().map(String::from).collect(),
            cached_line_no_width: None,
        }
    }

    /// The line at a zero-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines in the file.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Width of the line-number gutter (cached).
    pub fn line_no_width(&mut self) -> usize {
        if self.cached_line_no_width.is_none() {
            let width = self.lines.len().max(1).to_string().len();
            self.cached_line_no_width = Some(width);
        }
        self.cached_line_no_width.unwrap()
    }

    /// All lines, for batch highlighting.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// A styled fragment of a highlighted line, re-emitted verbatim by the
/// widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedSpan {
    /// The text content.
    pub text: String,
    /// Foreground color, if styled.
    pub fg: Option<Color>,
    /// Background color, if styled.
    pub bg: Option<Color>,
    /// Bold style flag.
    pub bold: bool,
    /// Italic style flag.
    pub italic: bool,
    /// Underline style flag.
    pub underline: bool,
}

impl HighlightedSpan {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_lines() {
        let file = SourceFile::new("src/lib.rs", "fn main() {\n    run();\n}\n");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line(0), Some("fn main() {"));
        assert_eq!(file.line(2), Some("}"));
        assert_eq!(file.line(3), None);
    }

    #[test]
    fn test_empty_content() {
        let mut file = SourceFile::new("empty.txt", "");
        assert_eq!(file.line_count(), 0);
        assert_eq!(file.line_no_width(), 1);
    }

    #[test]
    fn test_line_no_width() {
        let content = "x\n".repeat(120);
        let mut file = SourceFile::new("wide.txt", &content);
        assert_eq!(file.line_no_width(), 3);
    }

    #[test]
    fn test_plain_span() {
        let span = HighlightedSpan::plain("text");
        assert_eq!(span.text, "text");
        assert_eq!(span.fg, None);
        assert!(!span.bold);
    }
}
