//! Text views and layout signals shared by the extractor and analyzer

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Share of ASCII characters above which text counts as ATS-safe
const ASCII_THRESHOLD: f32 = 0.95;

pub struct TextProcessor {
    bullet_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let bullet_regex = Regex::new(r"(?m)^[ \t]*(?:[•◦▪▫‣●■○]|[-*+])[ \t]+\S")
            .expect("Invalid bullet regex");

        Self { bullet_regex }
    }

    /// Split on line breaks, trim each line and drop empty ones
    pub fn lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Unicode word iterator, in text order
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.unicode_words()
    }

    /// Length in characters, not bytes
    pub fn char_count(&self, text: &str) -> usize {
        text.chars().count()
    }

    /// Replace typographic punctuation with ASCII equivalents and drop
    /// bullet glyphs
    pub fn normalize_typography(&self, text: &str) -> String {
        text.chars()
            .filter_map(|c| match c {
                '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => Some('\''),
                '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => Some('"'),
                '\u{2010}'..='\u{2015}' => Some('-'),
                '\u{2026}' => Some('.'),
                '\u{00A0}' | '\u{2007}' | '\u{202F}' => Some(' '),
                '•' | '◦' | '▪' | '▫' | '‣' | '●' | '■' | '○' | '·' => None,
                _ => Some(c),
            })
            .collect()
    }

    /// Fraction of ASCII characters after typographic normalization.
    /// Empty text counts as fully ASCII.
    pub fn ascii_ratio(&self, text: &str) -> f32 {
        let normalized = self.normalize_typography(text);
        let total = normalized.chars().count();
        if total == 0 {
            return 1.0;
        }

        let ascii = normalized.chars().filter(char::is_ascii).count();
        ascii as f32 / total as f32
    }

    pub fn is_predominantly_ascii(&self, text: &str) -> bool {
        self.ascii_ratio(text) >= ASCII_THRESHOLD
    }

    /// Box-drawing and block characters, typical of pasted tables
    pub fn has_table_characters(&self, text: &str) -> bool {
        text.chars().any(|c| ('\u{2500}'..='\u{259F}').contains(&c))
    }

    pub fn has_bullets(&self, text: &str) -> bool {
        text.contains('•') || self.bullet_regex.is_match(text)
    }

    /// Two or more consecutive tabs, usually column alignment
    pub fn has_tab_runs(&self, text: &str) -> bool {
        text.contains("\t\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed_and_non_empty() {
        let processor = TextProcessor::new();
        let lines = processor.lines("  Jane Doe  \r\n\n\t\nEngineer\n   ");

        assert_eq!(lines, vec!["Jane Doe", "Engineer"]);
    }

    #[test]
    fn test_typography_normalization() {
        let processor = TextProcessor::new();
        let normalized = processor.normalize_typography("• “Led” the team — 2019…2021");

        assert_eq!(normalized, " \"Led\" the team - 2019.2021");
    }

    #[test]
    fn test_ascii_ratio() {
        let processor = TextProcessor::new();

        assert_eq!(processor.ascii_ratio(""), 1.0);
        assert!(processor.is_predominantly_ascii("Résumé of a software engineer with a long history"));
        assert!(processor.is_predominantly_ascii("Smart “quotes” and – dashes"));
        assert!(!processor.is_predominantly_ascii("履歴書 ソフトウェアエンジニア"));
    }

    #[test]
    fn test_layout_signals() {
        let processor = TextProcessor::new();

        assert!(processor.has_table_characters("┌──────┐\n│ Rust │"));
        assert!(!processor.has_table_characters("Skills | Rust | Go"));

        assert!(processor.has_bullets("Experience\n- Built things"));
        assert!(processor.has_bullets("Built things • Shipped things"));
        assert!(!processor.has_bullets("Built-in tooling\nRe-wrote parser"));

        assert!(processor.has_tab_runs("Name\t\tJane"));
        assert!(!processor.has_tab_runs("Name\tJane"));
    }

    #[test]
    fn test_words_follow_text_order() {
        let processor = TextProcessor::new();
        let words: Vec<&str> = processor.words("Led a team; built APIs.").collect();

        assert_eq!(words, vec!["Led", "a", "team", "built", "APIs"]);
    }
}
