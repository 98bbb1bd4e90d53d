//! Syntax highlighter using syntect.

use crate::model::HighlightedSpan;
use ratatui::style::Color;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

/// Per-line syntax highlighter for the viewed file.
///
/// The language is derived from the file's extension; unrecognized
/// extensions fall back to syntect's plain-text syntax.
pub struct SourceHighlighter {
    /// Syntax definitions.
    syntax_set: SyntaxSet,
    /// Current theme.
    theme: Theme,
    /// Cache of highlighted content by (path, line_content) hash.
    cache: HashMap<u64, Vec<HighlightedSpan>>,
    /// Maximum cache size.
    max_cache_size: usize,
    /// Cache of syntax indices by file extension.
    syntax_cache: HashMap<String, usize>,
}

impl std::fmt::Debug for SourceHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceHighlighter")
            .field("cache_size", &self.cache.len())
            .field("max_cache_size", &self.max_cache_size)
            .finish()
    }
}

impl Default for SourceHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceHighlighter {
    /// Create a new highlighter with default settings.
    pub fn new() -> Self {
        let theme_set = ThemeSet::load_defaults();
        Self::with_theme(theme_set.themes["base16-ocean.dark"].clone())
    }

    /// Create a highlighter with a specific theme name, falling back to the
    /// default theme when the name is unknown.
    pub fn with_theme_name(theme_name: &str) -> Self {
        let theme_set = ThemeSet::load_defaults();
        let theme = theme_set
            .themes
            .get(theme_name)
            .cloned()
            .unwrap_or_else(|| theme_set.themes["base16-ocean.dark"].clone());
        Self::with_theme(theme)
    }

    /// Create a highlighter with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            cache: HashMap::new(),
            max_cache_size: 5000,
            syntax_cache: HashMap::new(),
        }
    }

    /// Set the maximum cache size.
    pub fn with_max_cache(mut self, size: usize) -> Self {
        self.max_cache_size = size;
        self
    }

    /// Theme names shipped with syntect's defaults.
    pub fn available_themes() -> Vec<&'static str> {
        vec![
            "base16-ocean.dark",
            "base16-ocean.light",
            "base16-eighties.dark",
            "base16-mocha.dark",
            "InspiredGitHub",
            "Solarized (dark)",
            "Solarized (light)",
        ]
    }

    /// Highlight a single line, returning styled spans.
    ///
    /// Results are cached by (path, content).
    pub fn highlight_line(&mut self, path: &str, content: &str) -> Vec<HighlightedSpan> {
        let key = self.cache_key(path, content);
        if let Some(spans) = self.cache.get(&key) {
            return spans.clone();
        }

        let syntax_idx = self.syntax_index(path);
        let syntax = self
            .syntax_set
            .syntaxes()
            .get(syntax_idx)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let spans = match highlighter.highlight_line(content, &self.syntax_set) {
            Ok(ranges) => ranges
                .iter()
                .map(|(style, text)| syntect_to_span(*style, text))
                .collect(),
            Err(_) => vec![HighlightedSpan::plain(content)],
        };

        if self.cache.len() >= self.max_cache_size {
            let to_remove = self.max_cache_size / 5;
            let keys_to_remove: Vec<_> = self.cache.keys().take(to_remove).copied().collect();
            for key in keys_to_remove {
                self.cache.remove(&key);
            }
        }
        self.cache.insert(key, spans.clone());

        spans
    }

    /// Pre-highlight a batch of lines (e.g. right after the file loads).
    pub fn prehighlight<'a>(&mut self, path: &str, lines: impl Iterator<Item = &'a str>) {
        for line in lines {
            let _ = self.highlight_line(path, line);
        }
    }

    /// Clear the highlight cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Current number of cached lines.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Resolve the syntax index for a file path (cached by extension).
    fn syntax_index(&mut self, path: &str) -> usize {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        if let Some(&idx) = self.syntax_cache.get(&ext) {
            return idx;
        }

        // The full lookup is expensive; do it once per extension.
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(&ext)
            .or_else(|| self.syntax_set.find_syntax_for_file(path).ok().flatten())
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let idx = self
            .syntax_set
            .syntaxes()
            .iter()
            .position(|s| s.name == syntax.name)
            .unwrap_or(0);

        self.syntax_cache.insert(ext, idx);
        idx
    }

    /// Compute a cache key for a path and content.
    fn cache_key(&self, path: &str, content: &str) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        path.hash(&mut hasher);
        content.hash(&mut hasher);
        hasher.finish()
    }
}

/// Convert a syntect style to a [`HighlightedSpan`].
fn syntect_to_span(style: Style, text: &str) -> HighlightedSpan {
    HighlightedSpan {
        text: text.to_string(),
        fg: Some(Color::Rgb(
            style.foreground.r,
            style.foreground.g,
            style.foreground.b,
        )),
        bg: if style.background.a > 0 {
            Some(Color::Rgb(
                style.background.r,
                style.background.g,
                style.background.b,
            ))
        } else {
            None
        },
        bold: style.font_style.contains(FontStyle::BOLD),
        italic: style.font_style.contains(FontStyle::ITALIC),
        underline: style.font_style.contains(FontStyle::UNDERLINE),
    }
}
