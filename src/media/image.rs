//! Material picture resolution

use super::MediaConfig;
use crate::search::Material;

/// Keyword -> bundled picture. Order matters: the first keyword found wins.
pub const KEYWORD_IMAGES: [(&str, &str); 19] = [
    ("laminat", "laminat.png"),
    ("laminate", "laminat.png"),
    ("hose", "hose.png"),
    ("lock", "lock.png"),
    ("libela", "libela.png"),
    ("level", "libela.png"),
    ("drill", "drillbit.png"),
    ("drillbit", "drillbit.png"),
    ("gloves", "gloves.png"),
    ("hammer", "hammer.png"),
    ("pants", "pants.png"),
    ("pliers", "pliers.png"),
    ("pvc", "pvc_pipes.png"),
    ("pipe", "pvc_pipes.png"),
    ("screw", "screw.png"),
    ("screwdriver", "screwdriver.png"),
    ("shirt", "shirt.png"),
    ("shoes", "shoes.png"),
    ("wrench", "wrench.png"),
];

/// Misspelled folder name found in stored picture paths
const MISSPELLED_FOLDER: &str = "deffault_material_png";
const FOLDER: &str = "default_material_png";

/// Resolve the picture to show for a material.
///
/// An explicit `picture_url` is normalised (backslashes, misspelled folder)
/// and used as is when it is an absolute URL or an `assets/` path; a bare
/// filename is placed under the assets folder. Without a URL the picture is
/// guessed from keywords in the name and market id.
pub fn image_src(material: &Material, config: &MediaConfig) -> String {
    let raw = material.picture_url.as_deref().unwrap_or("").trim();

    if raw.is_empty() {
        return guess_from_keywords(material, config);
    }

    let normalized = raw.replace('\\', "/").replacen(MISSPELLED_FOLDER, FOLDER, 1);

    if is_http_url(&normalized) || normalized.starts_with("assets/") {
        return normalized;
    }

    config.asset(&normalized)
}

fn guess_from_keywords(material: &Material, config: &MediaConfig) -> String {
    let haystack = format!("{} {}", material.name, material.market_id).to_lowercase();

    KEYWORD_IMAGES
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, file)| config.asset(file))
        .unwrap_or_else(|| config.asset(&config.default_image))
}

fn is_http_url(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
