//! Search-as-you-type filtering over Cyrillic names and Latin market codes
//!
//! Users often type Latin while the catalog stores names in Cyrillic. Each
//! keystroke builds a [`QueryState`] holding both the raw term and its
//! transliteration, and every list view filters through [`matches`].
//!
//! ```
//! use kiril::search::{matches, Material, QueryState};
//!
//! let brush = Material::new(1, "Четка", "M-55");
//! assert!(matches(&QueryState::new("chetka"), &brush));
//! assert!(matches(&QueryState::new("m-55"), &brush));
//! assert!(!matches(&QueryState::new("m-56"), &brush));
//! ```

mod matcher;
mod query;
mod record;

pub use matcher::{filter_records, find_by_option_label, matches};
pub use query::QueryState;
pub use record::{Material, ProjectMaterialRow, SearchableRecord};
