//! Main state for the reaction viewer widget.

use super::NavigationState;
use crate::action::ViewerAction;
use crate::event::ViewerEvent;
use crate::model::{
    visible_options, FileReactions, LineReactions, SourceFile, Username, EMOJI_OPTIONS,
};

/// Identity used until the host's identity request resolves.
///
/// Toggles attributed to it remain functionally valid; different
/// unauthenticated viewers may share it.
pub const PLACEHOLDER_USER: &str = "anonymous";

/// One row of the rendered output.
///
/// Source lines are interleaved with the reaction affordance rows that are
/// currently visible; scroll offsets count these display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow {
    /// A source line, by zero-based line index.
    Source(usize),
    /// The reaction affordance row under a line.
    Reactions(usize),
}

/// Main state for the reaction viewer widget.
#[derive(Debug, Clone)]
pub struct ReactionViewerState {
    /// The file being viewed.
    pub source: SourceFile,
    /// Authoritative in-memory reaction map for the file.
    pub reactions: FileReactions,
    /// Resolved viewer identity, once the host's identity request lands.
    pub username: Option<Username>,
    /// Navigation state.
    pub nav: NavigationState,
    /// Viewport height in display rows (for scroll calculations).
    pub viewport_height: usize,
}

impl ReactionViewerState {
    /// Create a new viewer state for a file.
    ///
    /// Reactions and identity start unset; the host feeds them in through
    /// [`set_reactions`](Self::set_reactions) and
    /// [`set_username`](Self::set_username) as its requests resolve.
    pub fn new(source: SourceFile) -> Self {
        Self {
            source,
            reactions: FileReactions::default(),
            username: None,
            nav: NavigationState::new(),
            viewport_height: 20, // Default, will be updated by orchestrator
        }
    }

    /// Apply the resolved viewer identity.
    ///
    /// One of the two initialization requests; may land before or after
    /// [`set_reactions`](Self::set_reactions). The rendered state reflects
    /// both once both have resolved.
    pub fn set_username(&mut self, username: impl Into<Username>) {
        self.username = Some(username.into());
    }

    /// Apply the reaction map loaded from the host store.
    ///
    /// The counterpart initialization request to
    /// [`set_username`](Self::set_username); no ordering is assumed between
    /// them.
    pub fn set_reactions(&mut self, reactions: FileReactions) {
        self.reactions = reactions;
    }

    /// The identity reactions are attributed to right now.
    pub fn current_user(&self) -> &str {
        self.username.as_deref().unwrap_or(PLACEHOLDER_USER)
    }

    /// Reactions recorded for a line, if any.
    pub fn line_reactions(&self, index: usize) -> Option<&LineReactions> {
        self.reactions.line(index)
    }

    /// True if a line has at least one reaction.
    pub fn has_any_reaction(&self, index: usize) -> bool {
        self.reactions.has_any_reaction(index)
    }

    /// Whether a line is hovered.
    ///
    /// The cursor line is the hover analog: its picker is expanded, every
    /// other line is collapsed, and the distinction is re-derived on each
    /// render pass rather than stored.
    pub fn is_hovered(&self, index: usize) -> bool {
        index == self.nav.cursor_line
    }

    /// Whether the reaction affordance row is visible under a line.
    pub fn reaction_row_visible(&self, index: usize) -> bool {
        self.has_any_reaction(index) || self.is_hovered(index)
    }

    /// Emoji buttons visible in a line's affordance row.
    pub fn visible_emoji(&self, index: usize) -> Vec<&'static str> {
        visible_options(self.line_reactions(index), self.is_hovered(index))
    }

    /// The emoji currently selected in the picker.
    pub fn selected_emoji(&self) -> &'static str {
        EMOJI_OPTIONS[self.nav.picker_index.min(EMOJI_OPTIONS.len() - 1)]
    }

    /// Summary of the selected emoji's reactions on the cursor line, for
    /// the footer (the tooltip analog).
    pub fn picker_summary(&self) -> String {
        let emoji = self.selected_emoji();
        let label = self
            .line_reactions(self.nav.cursor_line)
            .map(|line| line.reactors_label(emoji))
            .unwrap_or_else(|| "No reactions yet".to_string());
        format!("{} {}", emoji, label)
    }

    /// Flatten the file into display rows: each source line, followed by its
    /// affordance row when visible.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        let mut rows = Vec::with_capacity(self.source.line_count() + 1);
        for index in 0..self.source.line_count() {
            rows.push(DisplayRow::Source(index));
            if self.reaction_row_visible(index) {
                rows.push(DisplayRow::Reactions(index));
            }
        }
        rows
    }

    /// Display row index of the cursor line.
    fn display_index_of_cursor(&self) -> usize {
        let cursor = self.nav.cursor_line;
        let mut index = cursor;
        for line in 0..cursor {
            if self.reaction_row_visible(line) {
                index += 1;
            }
        }
        index
    }

    /// Adjust scroll so the cursor line and its picker row are on screen.
    fn ensure_cursor_visible(&mut self) {
        let display_index = self.display_index_of_cursor();
        let height = self.viewport_height.max(1);
        self.nav.ensure_visible(display_index + 1, height);
        self.nav.ensure_visible(display_index, height);
    }

    /// Handle an action, returning any resulting events.
    ///
    /// This is the main entry point for processing user actions. The
    /// orchestrating application is responsible for mapping key events to
    /// ViewerAction variants.
    pub fn handle_action(&mut self, action: ViewerAction) -> Vec<ViewerEvent> {
        let mut events = Vec::new();
        if let Some(event) = self.apply_action(&action) {
            events.push(event);
        }
        events
    }

    fn apply_action(&mut self, action: &ViewerAction) -> Option<ViewerEvent> {
        let line_count = self.source.line_count();

        match action {
            // === Navigation ===
            ViewerAction::CursorDown => {
                self.nav.cursor_down(line_count);
                self.after_cursor_move()
            }
            ViewerAction::CursorUp => {
                self.nav.cursor_up();
                self.after_cursor_move()
            }
            ViewerAction::CursorFirst => {
                self.nav.cursor_first();
                self.after_cursor_move()
            }
            ViewerAction::CursorLast => {
                self.nav.cursor_last(line_count);
                self.after_cursor_move()
            }

            // === Scrolling ===
            ViewerAction::ScrollHalfDown => {
                self.nav.cursor_half_down(self.viewport_height, line_count);
                self.after_cursor_move()
            }
            ViewerAction::ScrollHalfUp => {
                self.nav.cursor_half_up(self.viewport_height);
                self.after_cursor_move()
            }
            ViewerAction::ScrollPageDown => {
                self.nav.cursor_page_down(self.viewport_height, line_count);
                self.after_cursor_move()
            }
            ViewerAction::ScrollPageUp => {
                self.nav.cursor_page_up(self.viewport_height);
                self.after_cursor_move()
            }

            // === Reaction Picker ===
            ViewerAction::PickerNext => {
                self.nav.picker_next(EMOJI_OPTIONS.len());
                None
            }
            ViewerAction::PickerPrev => {
                self.nav.picker_prev(EMOJI_OPTIONS.len());
                None
            }
            ViewerAction::ToggleReaction => self.toggle_at_cursor(self.selected_emoji()),
            ViewerAction::SelectEmoji(index) => {
                let emoji = EMOJI_OPTIONS.get(*index).copied()?;
                self.nav.picker_index = *index;
                self.toggle_at_cursor(emoji)
            }

            // === General ===
            ViewerAction::Close => Some(ViewerEvent::Close),

            // === Viewport ===
            ViewerAction::SetViewport { width: _, height } => {
                self.viewport_height = *height as usize;
                None
            }
        }
    }

    /// Reset the picker, fix scroll, and report the new selection.
    fn after_cursor_move(&mut self) -> Option<ViewerEvent> {
        self.nav.reset_picker();
        self.ensure_cursor_visible();

        let line = (self.source.line_count() > 0).then_some(self.nav.cursor_line);
        Some(ViewerEvent::SelectionChanged {
            path: self.source.path.clone(),
            line,
        })
    }

    /// Run the toggle transition for the cursor line and hand the full new
    /// map to the host for persistence.
    fn toggle_at_cursor(&mut self, emoji: &str) -> Option<ViewerEvent> {
        let line = self.nav.cursor_line;
        let user = self.current_user().to_string();
        self.reactions.toggle(line, emoji, &user);

        Some(ViewerEvent::ReactionsChanged {
            path: self.source.path.clone(),
            reactions: self.reactions.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_state() -> ReactionViewerState {
        let source = SourceFile::new(
            "src/main.rs",
            "fn main() {\n    let x = 1;\n    let y = 2;\n    run(x, y);\n}\n",
        );
        ReactionViewerState::new(source)
    }

    #[test]
    fn test_new_state() {
        let state = sample_state();
        assert_eq!(state.source.line_count(), 5);
        assert!(state.reactions.is_empty());
        assert_eq!(state.username, None);
        assert_eq!(state.current_user(), PLACEHOLDER_USER);
    }

    #[test]
    fn test_navigation() {
        let mut state = sample_state();

        let events = state.handle_action(ViewerAction::CursorDown);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            ViewerEvent::SelectionChanged { line: Some(1), .. }
        ));
        assert_eq!(state.nav.cursor_line, 1);

        state.handle_action(ViewerAction::CursorUp);
        assert_eq!(state.nav.cursor_line, 0);

        state.handle_action(ViewerAction::CursorLast);
        assert_eq!(state.nav.cursor_line, 4);

        state.handle_action(ViewerAction::CursorFirst);
        assert_eq!(state.nav.cursor_line, 0);
    }

    #[test]
    fn test_toggle_emits_full_map() {
        let mut state = sample_state();
        state.set_username("alice");
        state.nav.cursor_line = 3;

        // 👍 is the last entry in the fixed emoji list.
        let events = state.handle_action(ViewerAction::SelectEmoji(4));
        assert_eq!(events.len(), 1);

        let ViewerEvent::ReactionsChanged { path, reactions } = &events[0] else {
            panic!("expected ReactionsChanged, got {:?}", events[0]);
        };
        assert_eq!(path, "src/main.rs");
        assert_eq!(
            serde_json::to_value(reactions).unwrap(),
            serde_json::json!({"3": {"👍": ["alice"]}})
        );
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = sample_state();
        state.set_username("alice");
        state.nav.cursor_line = 2;

        state.handle_action(ViewerAction::ToggleReaction);
        assert!(state.has_any_reaction(2));

        state.handle_action(ViewerAction::ToggleReaction);
        assert!(!state.has_any_reaction(2));
        assert!(state.reactions.is_empty());
    }

    #[test]
    fn test_toggle_off_preserves_others() {
        let mut state = sample_state();
        let mut stored = FileReactions::default();
        stored.toggle(1, "😃", "bob");
        stored.toggle(1, "😃", "carol");
        state.set_reactions(stored);
        state.set_username("bob");
        state.nav.cursor_line = 1;

        // 😃 sits at index 1 of the fixed emoji list.
        state.handle_action(ViewerAction::SelectEmoji(1));
        assert_eq!(state.line_reactions(1).unwrap().users("😃"), ["carol"]);
    }

    #[test]
    fn test_init_order_is_irrelevant() {
        let mut stored = FileReactions::default();
        stored.toggle(0, "👍", "alice");

        let mut first_user = sample_state();
        first_user.set_username("bob");
        first_user.set_reactions(stored.clone());

        let mut first_reactions = sample_state();
        first_reactions.set_reactions(stored);
        first_reactions.set_username("bob");

        assert_eq!(first_user.current_user(), first_reactions.current_user());
        assert_eq!(first_user.reactions, first_reactions.reactions);
    }

    #[test]
    fn test_placeholder_identity_still_toggles() {
        let mut state = sample_state();
        state.handle_action(ViewerAction::ToggleReaction);

        let line = state.line_reactions(0).unwrap();
        assert_eq!(line.users(EMOJI_OPTIONS[0]), [PLACEHOLDER_USER]);
    }

    #[test]
    fn test_visible_emoji() {
        let mut state = sample_state();
        state.set_username("alice");
        state.nav.cursor_line = 1;
        state.handle_action(ViewerAction::SelectEmoji(4));

        // Hovered line shows every option.
        assert_eq!(state.visible_emoji(1), EMOJI_OPTIONS.to_vec());

        // Once the cursor leaves, only reacted emoji stay visible.
        state.handle_action(ViewerAction::CursorUp);
        assert_eq!(state.visible_emoji(1), vec!["👍"]);
        assert!(state.visible_emoji(2).is_empty());
    }

    #[test]
    fn test_display_rows() {
        let mut state = sample_state();
        state.set_username("alice");
        state.nav.cursor_line = 2;
        state.handle_action(ViewerAction::ToggleReaction);
        state.handle_action(ViewerAction::CursorFirst);

        // Affordance rows: under the hovered line 0 and the reacted line 2.
        assert_eq!(
            state.display_rows(),
            vec![
                DisplayRow::Source(0),
                DisplayRow::Reactions(0),
                DisplayRow::Source(1),
                DisplayRow::Source(2),
                DisplayRow::Reactions(2),
                DisplayRow::Source(3),
                DisplayRow::Source(4),
            ]
        );
    }

    #[test]
    fn test_picker_summary() {
        let mut state = sample_state();
        state.set_username("alice");
        state.handle_action(ViewerAction::ToggleReaction);

        assert_eq!(state.picker_summary(), "😍 Reactions from alice");

        state.handle_action(ViewerAction::PickerNext);
        assert_eq!(state.picker_summary(), "😃 No reactions yet");
    }

    #[test]
    fn test_cursor_move_resets_picker() {
        let mut state = sample_state();
        state.handle_action(ViewerAction::PickerNext);
        assert_eq!(state.nav.picker_index, 1);

        state.handle_action(ViewerAction::CursorDown);
        assert_eq!(state.nav.picker_index, 0);
    }

    #[test]
    fn test_out_of_range_emoji_is_ignored() {
        let mut state = sample_state();
        let events = state.handle_action(ViewerAction::SelectEmoji(99));
        assert!(events.is_empty());
        assert!(state.reactions.is_empty());
    }

    #[test]
    fn test_set_viewport() {
        let mut state = sample_state();
        state.handle_action(ViewerAction::SetViewport {
            width: 100,
            height: 50,
        });
        assert_eq!(state.viewport_height, 50);
    }

    #[test]
    fn test_close_event() {
        let mut state = sample_state();
        let events = state.handle_action(ViewerAction::Close);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ViewerEvent::Close));
    }
}
