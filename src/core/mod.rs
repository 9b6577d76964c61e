//! Transliteration core

pub mod cyrillic_map;
pub mod transliterator;
