//! Search input state

use crate::core::transliterator::transliterate;

/// The raw Latin term and its Cyrillic transliteration, both lowercase.
///
/// Both fields are derived together from one input, so they never diverge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    latin_term: String,
    transliterated_term: String,
}

impl QueryState {
    /// Build the state for one input change
    pub fn new(input: &str) -> Self {
        let latin_term = input.to_lowercase();
        let transliterated_term = transliterate(&latin_term);
        Self {
            latin_term,
            transliterated_term,
        }
    }

    /// No filter: every record matches
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn latin_term(&self) -> &str {
        &self.latin_term
    }

    pub fn transliterated_term(&self) -> &str {
        &self.transliterated_term
    }

    pub fn is_empty(&self) -> bool {
        self.latin_term.is_empty() && self.transliterated_term.is_empty()
    }
}

impl From<&str> for QueryState {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}
