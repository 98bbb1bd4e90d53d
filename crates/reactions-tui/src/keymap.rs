//! Key event to viewer action mapping.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reaction_viewer::ViewerAction;

/// Map a key event to the viewer action it triggers, if any.
pub fn map_key(key: KeyEvent) -> Option<ViewerAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // General
        KeyCode::Char('q') | KeyCode::Esc => Some(ViewerAction::Close),
        KeyCode::Char('c') if ctrl => Some(ViewerAction::Close),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(ViewerAction::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(ViewerAction::CursorUp),
        KeyCode::Char('g') => Some(ViewerAction::CursorFirst),
        KeyCode::Char('G') => Some(ViewerAction::CursorLast),

        // Scrolling
        KeyCode::Char('d') if ctrl => Some(ViewerAction::ScrollHalfDown),
        KeyCode::Char('u') if ctrl => Some(ViewerAction::ScrollHalfUp),
        KeyCode::PageDown => Some(ViewerAction::ScrollPageDown),
        KeyCode::PageUp => Some(ViewerAction::ScrollPageUp),

        // Reaction picker
        KeyCode::Char('l') | KeyCode::Right => Some(ViewerAction::PickerNext),
        KeyCode::Char('h') | KeyCode::Left => Some(ViewerAction::PickerPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(ViewerAction::ToggleReaction),
        KeyCode::Char(c @ '1'..='5') => {
            Some(ViewerAction::SelectEmoji(c as usize - '1' as usize))
        }

        _ => None,
    }
}
