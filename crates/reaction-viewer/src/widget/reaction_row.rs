//! The reaction affordance row rendered under a source line.

use crate::model::{visible_options, LineReactions};
use crate::traits::ThemeProvider;
use ratatui::prelude::*;

/// Widget for one line's reaction affordance row.
pub struct ReactionRow<'a, T: ThemeProvider> {
    /// Reactions recorded for the line, if any.
    reactions: Option<&'a LineReactions>,
    /// Identity the active highlight is computed against.
    current_user: &'a str,
    /// Whether the line is hovered (picker expanded).
    hovered: bool,
    /// Selected button in the picker; only meaningful when hovered.
    picker_index: usize,
    /// Gutter width of the surrounding pane, for alignment.
    gutter_width: usize,
    /// Theme provider.
    theme: &'a T,
}

impl<'a, T: ThemeProvider> ReactionRow<'a, T> {
    /// Create a reaction row for one line.
    pub fn new(
        reactions: Option<&'a LineReactions>,
        current_user: &'a str,
        hovered: bool,
        picker_index: usize,
        gutter_width: usize,
        theme: &'a T,
    ) -> Self {
        Self {
            reactions,
            current_user,
            hovered,
            picker_index,
            gutter_width,
            theme,
        }
    }

    /// Render the row at a fixed position.
    pub fn render(&self, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let row_style = Style::default().bg(self.theme.reaction_row_background());

        // Fill background
        for i in 0..width {
            buf.set_string(x + i, y, " ", row_style);
        }

        // Align buttons under the line content, past the gutter.
        let mut col = self.gutter_width as u16 + 2;

        for (index, emoji) in visible_options(self.reactions, self.hovered)
            .into_iter()
            .enumerate()
        {
            let count = self.reactions.map(|r| r.count(emoji)).unwrap_or(0);
            let active = self
                .reactions
                .is_some_and(|r| r.is_selected(emoji, self.current_user));
            let selected = self.hovered && index == self.picker_index;

            // Button width: marker + padded emoji + optional count badge.
            let badge = if count > 0 {
                format!("{} ", count)
            } else {
                String::new()
            };
            let button_width = 1 + 4 + badge.len() as u16;
            if col + button_width >= width {
                break;
            }

            let marker_style = row_style.fg(self.theme.picker_cursor_foreground());
            buf.set_string(x + col, y, if selected { "▸" } else { " " }, marker_style);
            col += 1;

            let mut button_style = Style::default().bg(if active {
                self.theme.reaction_active_background()
            } else {
                self.theme.reaction_inactive_background()
            });
            if active {
                button_style = button_style.add_modifier(Modifier::BOLD);
            }

            buf.set_string(x + col, y, format!(" {} ", emoji), button_style);
            col += 4;

            if count > 0 {
                buf.set_string(
                    x + col,
                    y,
                    &badge,
                    button_style.fg(self.theme.count_foreground()),
                );
                col += badge.len() as u16;
            }

            // Gap between buttons
            col += 1;
        }
    }
}
