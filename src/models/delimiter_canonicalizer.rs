use crate::constants::{DEFAULT_DELIMITERS, ECP_SEPARATOR};
use crate::models::Error;
use crate::types::CanonicalName;

/// The outcome of canonicalizing one item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalizedName {
    pub text: CanonicalName,

    /// True iff the input contained at least one special (non-space)
    /// delimiter, in which case the transformation is lossy and the caller
    /// must cache the original for exact reversal.
    pub is_exceptional: bool,
}

/// Collapses punctuation/space runs in an item name into single `_`
/// separators, using one-character lookahead.
pub struct DelimiterCanonicalizer {
    delimiters: Vec<char>,
}

impl DelimiterCanonicalizer {
    pub fn new(delimiters: &[char]) -> Self {
        Self {
            delimiters: delimiters.to_vec(),
        }
    }

    /// Scans `name` left to right. A delimiter whose next character is a
    /// space, another delimiter, or end-of-string is deleted outright;
    /// otherwise it is replaced with the canonical separator. The result is
    /// invariant under re-application once no delimiters remain.
    pub fn canonicalize(&self, name: &str) -> Result<CanonicalizedName, Error> {
        if name.is_empty() {
            return Err(Error::EmptyInput(
                "Cannot canonicalize an empty item name".to_string(),
            ));
        }

        let chars: Vec<char> = name.chars().collect();
        let mut text = String::with_capacity(name.len());
        let mut is_exceptional = false;

        for (i, &c) in chars.iter().enumerate() {
            if !self.is_delimiter(c) {
                text.push(c);
                continue;
            }

            if c != ' ' {
                is_exceptional = true;
            }

            match chars.get(i + 1) {
                // Trailing delimiters collapse to nothing.
                None => {}
                // So do delimiters followed by a space or another delimiter.
                Some(&next) if next == ' ' || self.is_delimiter(next) => {}
                Some(_) => text.push(ECP_SEPARATOR),
            }
        }

        Ok(CanonicalizedName {
            text,
            is_exceptional,
        })
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }
}

impl Default for DelimiterCanonicalizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS)
    }
}
