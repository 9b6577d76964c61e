pub mod catalog;
pub mod config;
pub mod core;
pub mod media;
pub mod search;

pub use crate::catalog::{Catalog, CatalogError};
pub use crate::core::transliterator::transliterate;
pub use crate::media::{image_src, seller_logo, MediaConfig};
pub use crate::search::{
    filter_records, find_by_option_label, matches, Material, ProjectMaterialRow, QueryState,
    SearchableRecord,
};
