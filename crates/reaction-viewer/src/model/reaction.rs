//! Reaction data structures: who reacted with what, per line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque identifier for the reacting viewer.
pub type Username = String;

/// The closed set of reaction emoji shipped with the widget.
pub const EMOJI_OPTIONS: [&str; 5] = ["😍", "😃", "🤓", "🤔", "👍"];

/// Reactions on a single line: emoji mapped to the usernames that reacted,
/// in the order they reacted.
///
/// A username appears at most once per emoji. [`LineReactions::toggle`]
/// enforces this at the mutation boundary; stored data is trusted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineReactions(BTreeMap<String, Vec<Username>>);

impl LineReactions {
    /// Usernames that reacted with `emoji`, oldest first.
    pub fn users(&self, emoji: &str) -> &[Username] {
        self.0.get(emoji).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of users that reacted with `emoji`.
    pub fn count(&self, emoji: &str) -> usize {
        self.users(emoji).len()
    }

    /// Check whether `user` has reacted with `emoji` on this line.
    pub fn is_selected(&self, emoji: &str, user: &str) -> bool {
        self.users(emoji).iter().any(|u| u == user)
    }

    /// True if any emoji on this line has at least one reaction.
    ///
    /// An emoji key holding an empty list (possible in stored data) counts
    /// the same as an absent key.
    pub fn has_any(&self) -> bool {
        self.0.values().any(|users| !users.is_empty())
    }

    /// True if no emoji on this line has a reaction.
    pub fn is_empty(&self) -> bool {
        !self.has_any()
    }

    /// Flip `user`'s membership for `emoji`.
    ///
    /// When the user is present they are removed and the remaining users keep
    /// their relative order; otherwise the user is appended at the end. An
    /// emoji whose list becomes empty is dropped from the map.
    pub fn toggle(&mut self, emoji: &str, user: &str) {
        let users = self.0.entry(emoji.to_string()).or_default();
        if let Some(pos) = users.iter().position(|u| u == user) {
            users.remove(pos);
        } else {
            users.push(user.to_string());
        }
        if self.0.get(emoji).is_some_and(Vec::is_empty) {
            self.0.remove(emoji);
        }
    }

    /// Human-readable summary of who reacted with `emoji`.
    pub fn reactors_label(&self, emoji: &str) -> String {
        let users = self.users(emoji);
        if users.is_empty() {
            "No reactions yet".to_string()
        } else {
            format!("Reactions from {}", users.join(", "))
        }
    }
}

/// Emoji buttons visible in a line's affordance row, in the fixed emoji
/// order.
///
/// A hovered line shows every option; a collapsed line only shows emoji
/// that already carry at least one reaction, so existing reactions stay
/// discoverable after the pointer leaves.
pub fn visible_options(reactions: Option<&LineReactions>, hovered: bool) -> Vec<&'static str> {
    if hovered {
        return EMOJI_OPTIONS.to_vec();
    }
    EMOJI_OPTIONS
        .iter()
        .copied()
        .filter(|emoji| reactions.is_some_and(|line| line.count(emoji) > 0))
        .collect()
}

/// All reactions for one file: zero-based line index mapped to that line's
/// reactions.
///
/// The map is sparse; only lines with reactions carry entries. The whole
/// value is the persistence unit for a file path and serializes to
/// `{"3": {"👍": ["alice"]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReactions(BTreeMap<usize, LineReactions>);

impl FileReactions {
    /// Reactions for the line at `index`, if any were recorded.
    pub fn line(&self, index: usize) -> Option<&LineReactions> {
        self.0.get(&index)
    }

    /// True if the line at `index` has at least one reaction.
    pub fn has_any_reaction(&self, index: usize) -> bool {
        self.line(index).is_some_and(LineReactions::has_any)
    }

    /// True if no line in the file has a reaction.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(LineReactions::is_empty)
    }

    /// Flip `user`'s membership for `emoji` on the line at `index`.
    ///
    /// Only that line's entry changes; every other entry keeps its value.
    /// A line whose reactions become empty is dropped, keeping the map
    /// sparse.
    pub fn toggle(&mut self, index: usize, emoji: &str, user: &str) {
        let line = self.0.entry(index).or_default();
        line.toggle(emoji, user);
        if line.is_empty() {
            self.0.remove(&index);
        }
    }

    /// Iterate over lines with recorded reactions, lowest index first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &LineReactions)> {
        self.0.iter().map(|(index, line)| (*index, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_on_appends_once() {
        let mut map = FileReactions::default();
        map.toggle(3, "👍", "alice");

        let users = map.line(3).unwrap().users("👍");
        assert_eq!(users, ["alice"]);
        assert!(map.line(3).unwrap().is_selected("👍", "alice"));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut map = FileReactions::default();
        map.toggle(3, "👍", "alice");
        map.toggle(3, "👍", "alice");

        assert_eq!(map, FileReactions::default());
        assert!(!map.has_any_reaction(3));
    }

    #[test]
    fn test_toggle_off_preserves_order_of_others() {
        let mut map = FileReactions::default();
        map.toggle(5, "😃", "bob");
        map.toggle(5, "😃", "carol");
        map.toggle(5, "😃", "bob");

        let line = map.line(5).unwrap();
        assert_eq!(line.users("😃"), ["carol"]);
        // No other emoji key appeared on the way.
        for emoji in EMOJI_OPTIONS.iter().filter(|e| **e != "😃") {
            assert_eq!(line.count(emoji), 0);
        }
    }

    #[test]
    fn test_membership_is_boolean() {
        let mut map = FileReactions::default();
        // Odd number of toggles: present exactly once.
        for _ in 0..3 {
            map.toggle(0, "🤔", "dave");
        }
        let users = map.line(0).unwrap().users("🤔");
        assert_eq!(users.iter().filter(|u| *u == "dave").count(), 1);

        // One more toggle: gone.
        map.toggle(0, "🤔", "dave");
        assert_eq!(map.line(0), None);
    }

    #[test]
    fn test_toggle_leaves_other_lines_untouched() {
        let mut map = FileReactions::default();
        map.toggle(1, "👍", "alice");
        map.toggle(2, "😍", "bob");

        let before = map.line(2).cloned();
        map.toggle(1, "👍", "carol");
        assert_eq!(map.line(2).cloned(), before);
    }

    #[test]
    fn test_has_any_matches_non_empty_lists() {
        let mut line = LineReactions::default();
        assert!(!line.has_any());

        line.toggle("👍", "alice");
        assert!(line.has_any());

        line.toggle("👍", "alice");
        assert!(!line.has_any());
    }

    #[test]
    fn test_stored_empty_list_counts_as_no_reactions() {
        // A host may hand back an entry whose list was kept empty rather
        // than dropped; both read as "no reactions".
        let line: LineReactions = serde_json::from_str(r#"{"👍": []}"#).unwrap();
        assert!(!line.has_any());
        assert_eq!(line.count("👍"), 0);
        assert_eq!(line.reactors_label("👍"), "No reactions yet");
    }

    #[test]
    fn test_serialized_shape() {
        let mut map = FileReactions::default();
        map.toggle(3, "👍", "alice");

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"3": {"👍": ["alice"]}}));

        let back: FileReactions = serde_json::from_value(json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_reactors_label() {
        let mut line = LineReactions::default();
        line.toggle("😃", "bob");
        line.toggle("😃", "carol");

        assert_eq!(line.reactors_label("😃"), "Reactions from bob, carol");
        assert_eq!(line.reactors_label("👍"), "No reactions yet");
    }

    #[test]
    fn test_hovered_line_shows_all_options() {
        let mut line = LineReactions::default();
        line.toggle("👍", "alice");

        assert_eq!(visible_options(Some(&line), true), EMOJI_OPTIONS.to_vec());
        assert_eq!(visible_options(None, true), EMOJI_OPTIONS.to_vec());
    }

    #[test]
    fn test_collapsed_line_shows_only_reacted_emoji() {
        let mut line = LineReactions::default();
        line.toggle("👍", "alice");
        line.toggle("😃", "carol");

        assert_eq!(visible_options(Some(&line), false), vec!["😃", "👍"]);
        assert!(visible_options(None, false).is_empty());
    }

    #[test]
    fn test_iter_is_ordered_by_line() {
        let mut map = FileReactions::default();
        map.toggle(9, "👍", "a");
        map.toggle(2, "👍", "a");
        map.toggle(5, "👍", "a");

        let lines: Vec<usize> = map.iter().map(|(index, _)| index).collect();
        assert_eq!(lines, [2, 5, 9]);
    }
}
