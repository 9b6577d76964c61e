//! Asset path resolution for material pictures and seller logos

mod image;
mod seller;

pub use image::{image_src, KEYWORD_IMAGES};
pub use seller::{seller_logo, slugify};

/// Where material and producer images live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    /// Folder of the bundled material pictures
    pub assets_base: String,
    /// File (inside `assets_base`) used when nothing else fits
    pub default_image: String,
    /// Folder of seller logos
    pub producers_base: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            assets_base: "assets/images/default_material_png".to_string(),
            default_image: "hammer.png".to_string(),
            producers_base: "assets/images/producers".to_string(),
        }
    }
}

impl MediaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets_base(mut self, base: impl Into<String>) -> Self {
        self.assets_base = base.into();
        self
    }

    pub fn with_default_image(mut self, file: impl Into<String>) -> Self {
        self.default_image = file.into();
        self
    }

    pub fn with_producers_base(mut self, base: impl Into<String>) -> Self {
        self.producers_base = base.into();
        self
    }

    /// `<assets_base>/<file>`
    pub(crate) fn asset(&self, file: &str) -> String {
        format!("{}/{}", self.assets_base.trim_end_matches('/'), file)
    }
}
