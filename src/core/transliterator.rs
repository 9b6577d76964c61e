//! Latin -> Macedonian Cyrillic transliteration

use crate::core::cyrillic_map::{map_digraph, map_letter};

/// Transliterate a Latin string into its Cyrillic approximation.
///
/// The input is lowercased first. At every position a digraph (`sh`, `ch`, ...)
/// wins over the single-letter map; once a digraph is consumed the scan resumes
/// after both characters. Anything without a mapping (digits, punctuation,
/// whitespace, Cyrillic) is copied through.
pub fn transliterate(input: &str) -> String {
    let lower = input.to_lowercase();
    let mut result = String::with_capacity(lower.len() * 2);
    let mut chars = lower.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(cyr) = chars.peek().and_then(|&next| map_digraph(c, next)) {
            result.push(cyr);
            chars.next();
            continue;
        }

        match map_letter(c) {
            Some(mapped) => result.push_str(mapped),
            None => result.push(c),
        }
    }

    result
}
