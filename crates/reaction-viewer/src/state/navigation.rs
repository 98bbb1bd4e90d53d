//! Navigation state for cursor, scroll, and the emoji picker.

/// Navigation state within the reaction viewer.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// Cursor line within the source file (zero-based source line).
    pub cursor_line: usize,
    /// Scroll offset (first visible display row).
    pub scroll_offset: usize,
    /// Selected emoji button within the picker on the cursor line.
    pub picker_index: usize,
}

impl NavigationState {
    /// Create new navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move cursor down by one line.
    pub fn cursor_down(&mut self, max_lines: usize) {
        if self.cursor_line + 1 < max_lines {
            self.cursor_line += 1;
        }
    }

    /// Move cursor up by one line.
    pub fn cursor_up(&mut self) {
        self.cursor_line = self.cursor_line.saturating_sub(1);
    }

    /// Move cursor to the first line.
    pub fn cursor_first(&mut self) {
        self.cursor_line = 0;
        self.scroll_offset = 0;
    }

    /// Move cursor to the last line.
    pub fn cursor_last(&mut self, max_lines: usize) {
        self.cursor_line = max_lines.saturating_sub(1);
    }

    /// Move cursor down by half a viewport.
    pub fn cursor_half_down(&mut self, visible_height: usize, max_lines: usize) {
        let half = visible_height / 2;
        self.cursor_line = (self.cursor_line + half).min(max_lines.saturating_sub(1));
    }

    /// Move cursor up by half a viewport.
    pub fn cursor_half_up(&mut self, visible_height: usize) {
        self.cursor_line = self.cursor_line.saturating_sub(visible_height / 2);
    }

    /// Move cursor down by a full viewport.
    pub fn cursor_page_down(&mut self, visible_height: usize, max_lines: usize) {
        self.cursor_line = (self.cursor_line + visible_height).min(max_lines.saturating_sub(1));
    }

    /// Move cursor up by a full viewport.
    pub fn cursor_page_up(&mut self, visible_height: usize) {
        self.cursor_line = self.cursor_line.saturating_sub(visible_height);
    }

    /// Select the next emoji button, wrapping around.
    pub fn picker_next(&mut self, button_count: usize) {
        if button_count > 0 {
            self.picker_index = (self.picker_index + 1) % button_count;
        }
    }

    /// Select the previous emoji button, wrapping around.
    pub fn picker_prev(&mut self, button_count: usize) {
        if button_count > 0 {
            self.picker_index = (self.picker_index + button_count - 1) % button_count;
        }
    }

    /// Reset the picker selection (on cursor movement).
    pub fn reset_picker(&mut self) {
        self.picker_index = 0;
    }

    /// Adjust scroll to keep a display row visible.
    pub fn ensure_visible(&mut self, display_row: usize, visible_height: usize) {
        if display_row < self.scroll_offset {
            self.scroll_offset = display_row;
        } else if display_row >= self.scroll_offset + visible_height {
            self.scroll_offset = display_row.saturating_sub(visible_height) + 1;
        }
    }
}
