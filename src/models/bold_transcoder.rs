use crate::constants::{BOLD_CHAR_SEQUENCE, PLAIN_CHAR_SEQUENCE};
use std::collections::HashMap;

/// Stateless bidirectional mapping between the 62 plain alphanumerics and
/// their Unicode mathematical sans-serif bold counterparts.
///
/// Characters outside the table pass through unchanged in both directions, so
/// separators, intent prefixes' underscores, and any stray punctuation
/// survive a styling round trip untouched. Styling is purely cosmetic and
/// never affects cache identity; decoding normalizes to plain form first.
pub struct BoldTranscoder {
    plain_to_bold: HashMap<char, char>,
    bold_to_plain: HashMap<char, char>,
}

impl BoldTranscoder {
    pub fn new() -> Self {
        let mut plain_to_bold = HashMap::new();
        let mut bold_to_plain = HashMap::new();

        for (plain, bold) in PLAIN_CHAR_SEQUENCE.chars().zip(BOLD_CHAR_SEQUENCE.chars()) {
            plain_to_bold.insert(plain, bold);
            bold_to_plain.insert(bold, plain);
        }

        // Both alphabets must cover all 62 entries with no duplicates.
        debug_assert_eq!(plain_to_bold.len(), 62);
        debug_assert_eq!(bold_to_plain.len(), 62);

        Self {
            plain_to_bold,
            bold_to_plain,
        }
    }

    pub fn to_styled(&self, text: &str) -> String {
        text.chars()
            .map(|c| *self.plain_to_bold.get(&c).unwrap_or(&c))
            .collect()
    }

    pub fn to_plain(&self, text: &str) -> String {
        text.chars()
            .map(|c| *self.bold_to_plain.get(&c).unwrap_or(&c))
            .collect()
    }
}

impl Default for BoldTranscoder {
    fn default() -> Self {
        Self::new()
    }
}
