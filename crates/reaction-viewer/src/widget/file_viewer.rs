//! Main file viewer widget: highlighted source lines plus reaction rows.

use super::ReactionRow;
use crate::highlight::SourceHighlighter;
use crate::state::{DisplayRow, ReactionViewerState};
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};

/// A single hint entry for the footer.
#[derive(Debug, Clone)]
pub struct FooterHint {
    /// The key (e.g., "1-5", "Space").
    pub key: String,
    /// The description (e.g., "React", "Quit").
    pub description: String,
}

impl FooterHint {
    /// Create a new footer hint.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// The file viewer widget.
///
/// Renders the bordered pane with the highlighted source, the per-line
/// reaction rows, and a footer carrying the reacting-users summary for the
/// selected emoji plus key hints.
///
/// # Example
///
/// ```ignore
/// use reaction_viewer::{FileViewer, SourceHighlighter};
/// use reaction_viewer::traits::DefaultTheme;
///
/// let mut highlighter = SourceHighlighter::new();
/// let theme = DefaultTheme;
///
/// let widget = FileViewer::new(&mut highlighter, &theme);
/// frame.render_stateful_widget(widget, area, &mut state);
/// ```
pub struct FileViewer<'a, T: ThemeProvider> {
    /// Syntax highlighter.
    highlighter: &'a mut SourceHighlighter,
    /// Theme provider.
    theme: &'a T,
    /// Footer hints to display.
    footer_hints: Vec<FooterHint>,
}

impl<'a, T: ThemeProvider> FileViewer<'a, T> {
    /// Create a new file viewer widget.
    pub fn new(highlighter: &'a mut SourceHighlighter, theme: &'a T) -> Self {
        Self {
            highlighter,
            theme,
            footer_hints: Vec::new(),
        }
    }

    /// Set footer hints to display at the bottom border.
    pub fn with_footer_hints(mut self, hints: Vec<FooterHint>) -> Self {
        self.footer_hints = hints;
        self
    }

    fn footer_line(&self, state: &ReactionViewerState) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];

        spans.push(Span::styled(
            state.picker_summary(),
            Style::default().fg(self.theme.hint_text_foreground()),
        ));

        for hint in &self.footer_hints {
            spans.push(Span::styled(
                " │ ",
                Style::default().fg(self.theme.hint_text_foreground()),
            ));
            spans.push(Span::styled(
                hint.key.clone(),
                Style::default()
                    .fg(self.theme.hint_key_foreground())
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", hint.description),
                Style::default().fg(self.theme.hint_text_foreground()),
            ));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    #[allow(clippy::too_many_arguments)]
    fn render_source_line(
        &mut self,
        state: &ReactionViewerState,
        line_index: usize,
        line_no_width: usize,
        x: u16,
        y: u16,
        width: u16,
        buf: &mut Buffer,
    ) {
        let is_cursor = line_index == state.nav.cursor_line;

        let base_style = if is_cursor {
            Style::default()
                .fg(self.theme.cursor_foreground())
                .bg(self.theme.cursor_background())
        } else {
            Style::default()
        };

        // Fill background
        for i in 0..width {
            buf.set_string(x + i, y, " ", base_style);
        }

        let mut current_x = x;

        // Line number gutter, dimmed except on the cursor line.
        let gutter_style = if is_cursor {
            base_style
        } else {
            base_style.fg(self.theme.gutter_foreground())
        };
        let line_no = format!("{:>width$} ", line_index + 1, width = line_no_width);
        buf.set_string(current_x, y, &line_no, gutter_style);
        current_x += line_no.len() as u16;

        // Highlighted content, re-emitted verbatim.
        let content_width = width.saturating_sub(current_x - x) as usize;
        let content = state.source.line(line_index).unwrap_or_default();
        let highlighted = self.highlighter.highlight_line(&state.source.path, content);

        let mut col = 0;
        for span in highlighted {
            if col >= content_width {
                break;
            }

            let available = content_width - col;
            let text: String = span.text.chars().take(available).collect();

            let mut style = base_style;
            // Keep cursor-line contrast instead of syntax colors.
            if !is_cursor {
                if let Some(fg) = span.fg {
                    style = style.fg(fg);
                }
            }
            if span.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if span.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }

            buf.set_string(current_x + col as u16, y, &text, style);
            col += text.chars().count();
        }
    }
}

impl<T: ThemeProvider> StatefulWidget for FileViewer<'_, T> {
    type State = ReactionViewerState;

    fn render(mut self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Update viewport height from the actual render area (borders excluded).
        state.viewport_height = area.height.saturating_sub(2) as usize;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_foreground()))
            .title(format!(" {} ", state.source.path))
            .title_bottom(self.footer_line(state));

        let inner = block.inner(area);
        block.render(area, buf);

        if state.source.line_count() == 0 {
            let msg = "Empty file";
            let x = inner.x + (inner.width.saturating_sub(msg.len() as u16)) / 2;
            let y = inner.y + inner.height / 2;
            buf.set_string(x, y, msg, Style::default().fg(Color::DarkGray));
            return;
        }

        let rows = state.display_rows();
        let line_no_width = state.source.line_no_width();
        let scroll_offset = state.nav.scroll_offset.min(rows.len().saturating_sub(1));
        let current_user = state.current_user().to_string();

        let visible = rows
            .iter()
            .skip(scroll_offset)
            .take(inner.height as usize)
            .copied()
            .collect::<Vec<_>>();

        for (rendered, row) in visible.into_iter().enumerate() {
            let y = inner.y + rendered as u16;
            match row {
                DisplayRow::Source(line_index) => {
                    self.render_source_line(
                        state,
                        line_index,
                        line_no_width,
                        inner.x,
                        y,
                        inner.width,
                        buf,
                    );
                }
                DisplayRow::Reactions(line_index) => {
                    let reaction_row = ReactionRow::new(
                        state.line_reactions(line_index),
                        &current_user,
                        state.is_hovered(line_index),
                        state.nav.picker_index,
                        line_no_width,
                        self.theme,
                    );
                    reaction_row.render(inner.x, y, inner.width, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceFile;
    use crate::traits::DefaultTheme;

    fn render_to_buffer(state: &mut ReactionViewerState, width: u16, height: u16) -> Buffer {
        let mut highlighter = SourceHighlighter::new();
        let theme = DefaultTheme;
        let widget = FileViewer::new(&mut highlighter, &theme)
            .with_footer_hints(vec![FooterHint::new("q", "Quit")]);

        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf, state);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_title_and_lines() {
        let source = SourceFile::new("src/lib.rs", "fn a() {}\nfn b() {}\n");
        let mut state = ReactionViewerState::new(source);

        let buf = render_to_buffer(&mut state, 40, 10);
        let text = buffer_text(&buf);

        assert!(text.contains("src/lib.rs"));
        assert!(text.contains("fn a() {}"));
        assert!(text.contains("fn b() {}"));
    }

    #[test]
    fn test_hovered_line_shows_picker_row() {
        let source = SourceFile::new("src/lib.rs", "fn a() {}\nfn b() {}\n");
        let mut state = ReactionViewerState::new(source);

        let buf = render_to_buffer(&mut state, 60, 10);
        let text = buffer_text(&buf);

        // Cursor sits on line 1, so its affordance row shows all options.
        assert!(text.contains("😍"));
        assert!(text.contains("👍"));
    }

    #[test]
    fn test_empty_file_placeholder() {
        let source = SourceFile::new("empty.txt", "");
        let mut state = ReactionViewerState::new(source);

        let buf = render_to_buffer(&mut state, 40, 10);
        assert!(buffer_text(&buf).contains("Empty file"));
    }

    #[test]
    fn test_viewport_height_updated_from_area() {
        let source = SourceFile::new("src/lib.rs", "fn a() {}\n");
        let mut state = ReactionViewerState::new(source);

        let _ = render_to_buffer(&mut state, 40, 12);
        assert_eq!(state.viewport_height, 10);
    }

    #[test]
    fn test_footer_hint() {
        let hint = FooterHint::new("Space", "React");
        assert_eq!(hint.key, "Space");
        assert_eq!(hint.description, "React");
    }
}
