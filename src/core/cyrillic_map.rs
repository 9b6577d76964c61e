//! Latin key -> Macedonian Cyrillic lookup tables

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Two-letter Latin sequences that collapse into a single Cyrillic letter.
pub const DIGRAPHS: [(&str, char); 8] = [
    ("gj", 'ѓ'),
    ("zh", 'ж'),
    ("dz", 'ѕ'),
    ("lj", 'љ'),
    ("nj", 'њ'),
    ("kj", 'ќ'),
    ("ch", 'ч'),
    ("sh", 'ш'),
];

/// Single Latin letters. `x` expands to two letters; `y`/`j` and `v`/`w` share a target.
pub const LETTERS: [(char, &str); 26] = [
    ('a', "а"),
    ('b', "б"),
    ('c', "ц"),
    ('d', "д"),
    ('e', "е"),
    ('f', "ф"),
    ('g', "г"),
    ('h', "х"),
    ('i', "и"),
    ('j', "ј"),
    ('k', "к"),
    ('l', "л"),
    ('m', "м"),
    ('n', "н"),
    ('o', "о"),
    ('p', "п"),
    ('q', "к"),
    ('r', "р"),
    ('s', "с"),
    ('t', "т"),
    ('u', "у"),
    ('v', "в"),
    ('w', "в"),
    ('x', "кс"),
    ('y', "ј"),
    ('z', "з"),
];

lazy_static! {
    /// Digraph map keyed by the (first, second) character pair.
    pub static ref DIGRAPH_MAP: HashMap<(char, char), char> = DIGRAPHS
        .iter()
        .filter_map(|(key, cyr)| {
            let mut chars = key.chars();
            Some(((chars.next()?, chars.next()?), *cyr))
        })
        .collect();

    /// Character map for lowercase `a`..=`z`.
    pub static ref CHARACTER_MAP: HashMap<char, &'static str> = LETTERS.iter().copied().collect();
}

/// Look up a digraph starting with `first` and followed by `second`.
/// Both characters must already be lowercase.
pub fn map_digraph(first: char, second: char) -> Option<char> {
    DIGRAPH_MAP.get(&(first, second)).copied()
}

/// Look up a single lowercase letter.
/// Characters outside the table (digits, punctuation, Cyrillic, ...) return None.
pub fn map_letter(c: char) -> Option<&'static str> {
    CHARACTER_MAP.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraph_mapping() {
        assert_eq!(map_digraph('s', 'h'), Some('ш'));
        assert_eq!(map_digraph('c', 'h'), Some('ч'));
        assert_eq!(map_digraph('z', 'h'), Some('ж'));
        assert_eq!(map_digraph('l', 'j'), Some('љ'));
        assert_eq!(map_digraph('n', 'j'), Some('њ'));
        assert_eq!(map_digraph('k', 'j'), Some('ќ'));
        assert_eq!(map_digraph('g', 'j'), Some('ѓ'));
        assert_eq!(map_digraph('d', 'z'), Some('ѕ'));
    }

    #[test]
    fn test_not_a_digraph() {
        assert_eq!(map_digraph('a', 'h'), None);
        assert_eq!(map_digraph('h', 's'), None);
        // case folding is the caller's job
        assert_eq!(map_digraph('S', 'H'), None);
    }

    #[test]
    fn test_letter_mapping() {
        assert_eq!(map_letter('a'), Some("а"));
        assert_eq!(map_letter('c'), Some("ц"));
        assert_eq!(map_letter('x'), Some("кс"));
        assert_eq!(map_letter('w'), map_letter('v'));
        assert_eq!(map_letter('y'), map_letter('j'));
        assert_eq!(map_letter('q'), map_letter('k'));
    }

    #[test]
    fn test_unmapped_characters() {
        assert!(map_letter('1').is_none());
        assert!(map_letter('-').is_none());
        assert!(map_letter(' ').is_none());
        assert!(map_letter('A').is_none());
        assert!(map_letter('ш').is_none());
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(CHARACTER_MAP.len(), 26);
        assert_eq!(DIGRAPH_MAP.len(), DIGRAPHS.len());
        assert!(('a'..='z').all(|c| map_letter(c).is_some()));
    }
}
