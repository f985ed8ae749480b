use crate::constants::DEFAULT_KEYWORD_PAIRS;
use crate::types::KeywordPair;
use log::debug;
use regex::{Regex, RegexBuilder};

struct KeywordRule {
    pattern: Regex,
    replacement: String,
}

/// Reversible substitution of known long phrases for short forms
/// (e.g. "Killstreak" ↔ "Ks").
///
/// Patterns are compiled once at construction into two ordered rule lists,
/// one per direction. Matching is case-insensitive and whole-word, where a
/// word boundary is start/end of text or any non-alphanumeric character
/// (`_` therefore counts as a boundary, so abbreviations still apply inside
/// canonicalized tokens). Rules run in table order; later rules see text
/// already rewritten by earlier ones.
pub struct KeywordTable {
    shorten_rules: Vec<KeywordRule>,
    expand_rules: Vec<KeywordRule>,
}

impl KeywordTable {
    pub fn new(pairs: &[KeywordPair]) -> Self {
        let mut shorten_rules = Vec::with_capacity(pairs.len());
        let mut expand_rules = Vec::with_capacity(pairs.len());

        for (long_form, short_form) in pairs {
            shorten_rules.push(KeywordRule {
                pattern: Self::compile_phrase(long_form),
                replacement: (*short_form).to_string(),
            });
            expand_rules.push(KeywordRule {
                pattern: Self::compile_phrase(short_form),
                replacement: (*long_form).to_string(),
            });
        }

        Self {
            shorten_rules,
            expand_rules,
        }
    }

    /// Replaces every whole-word long phrase with its short form.
    pub fn shorten(&self, text: &str) -> String {
        Self::apply_rules(&self.shorten_rules, text)
    }

    /// Replaces every whole-word short form with its canonical long phrase.
    /// Reproduces canonical capitalization, not necessarily the original.
    pub fn expand(&self, text: &str) -> String {
        Self::apply_rules(&self.expand_rules, text)
    }

    fn apply_rules(rules: &[KeywordRule], text: &str) -> String {
        let mut result = text.to_string();

        for rule in rules {
            result = Self::replace_whole_word(&rule.pattern, &result, &rule.replacement);
        }

        if result != text {
            debug!("Keyword substitution rewrote {:?} to {:?}", text, result);
        }

        result
    }

    /// Like `Regex::replace_all`, but a match only counts when the characters
    /// adjacent to it are not alphanumeric. The `regex` crate's `\b` treats
    /// `_` as a word character, which would stop abbreviations from matching
    /// inside separator-joined tokens.
    fn replace_whole_word(pattern: &Regex, haystack: &str, replacement: &str) -> String {
        let mut result = String::with_capacity(haystack.len());
        let mut last_end = 0;

        for found in pattern.find_iter(haystack) {
            let boundary_before = haystack[..found.start()]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
            let boundary_after = haystack[found.end()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());

            if boundary_before && boundary_after {
                result.push_str(&haystack[last_end..found.start()]);
                result.push_str(replacement);
                last_end = found.end();
            }
        }

        result.push_str(&haystack[last_end..]);
        result
    }

    fn compile_phrase(phrase: &str) -> Regex {
        RegexBuilder::new(&regex::escape(phrase))
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("Invalid keyword phrase {:?}: {}", phrase, e))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD_PAIRS)
    }
}
