//! Trait for providing theme configuration to the reaction viewer.

use ratatui::style::Color;

/// Provides colors and styles for the reaction viewer.
///
/// Implement this trait to integrate the viewer with the host application's
/// theme system; the instance is injected by the orchestrator. Every method
/// has a sensible dark-mode default.
pub trait ThemeProvider: Send + Sync {
    /// Foreground color for line numbers (rendered dimmed).
    fn gutter_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Background color for the cursor line.
    fn cursor_background(&self) -> Color {
        Color::Rgb(50, 50, 80)
    }

    /// Foreground color for the cursor line.
    fn cursor_foreground(&self) -> Color {
        Color::White
    }

    /// Background color for the reaction affordance row.
    fn reaction_row_background(&self) -> Color {
        Color::Rgb(30, 30, 40)
    }

    /// Background color for an emoji button the current user has selected.
    fn reaction_active_background(&self) -> Color {
        Color::Rgb(30, 62, 92)
    }

    /// Background color for an emoji button without the current user.
    fn reaction_inactive_background(&self) -> Color {
        Color::Rgb(44, 44, 52)
    }

    /// Foreground color for reaction count badges.
    fn count_foreground(&self) -> Color {
        Color::Cyan
    }

    /// Foreground color for the picker selection marker.
    fn picker_cursor_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground color for key hints (the key part like "1-5", "Space").
    fn hint_key_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground color for hint descriptions.
    fn hint_text_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Border color of the viewer pane.
    fn border_foreground(&self) -> Color {
        Color::DarkGray
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.gutter_foreground(), Color::DarkGray);
        assert_eq!(theme.reaction_active_background(), Color::Rgb(30, 62, 92));
        assert_ne!(
            theme.reaction_active_background(),
            theme.reaction_inactive_background()
        );
    }
}
