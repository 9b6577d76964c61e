//! Config file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::media::MediaConfig;

/// kiril settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KirilConfig {
    /// Folder of the bundled material pictures
    #[serde(default = "default_assets_base")]
    pub assets_base: String,
    /// Fallback picture inside `assets_base`
    #[serde(default = "default_image")]
    pub default_image: String,
    /// Folder of seller logos
    #[serde(default = "default_producers_base")]
    pub producers_base: String,
    /// Catalog used by `kiril search` when `--catalog` is not given
    #[serde(default)]
    pub catalog_path: Option<String>,
}

fn default_assets_base() -> String {
    MediaConfig::default().assets_base
}

fn default_image() -> String {
    MediaConfig::default().default_image
}

fn default_producers_base() -> String {
    MediaConfig::default().producers_base
}

impl Default for KirilConfig {
    fn default() -> Self {
        Self {
            assets_base: default_assets_base(),
            default_image: default_image(),
            producers_base: default_producers_base(),
            catalog_path: None,
        }
    }
}

impl KirilConfig {
    pub fn media(&self) -> MediaConfig {
        MediaConfig::new()
            .with_assets_base(self.assets_base.clone())
            .with_default_image(self.default_image.clone())
            .with_producers_base(self.producers_base.clone())
    }
}

/// Config path: ~/.config/kiril/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("kiril").join("config.json")
}

/// Load the config (defaults when the file is missing or unreadable)
pub fn load_config() -> KirilConfig {
    load_config_from(&config_path())
}

/// Load the config stored at `path`
pub fn load_config_from(path: &Path) -> KirilConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(_) => KirilConfig::default(),
    }
}

fn parse_config(content: &str) -> KirilConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("invalid config file, using defaults: {}", e);
        KirilConfig::default()
    })
}

/// Save the config file
pub fn save_config(config: &KirilConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// Write the config to `path`, creating parent directories
pub fn save_config_to(config: &KirilConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create config directory: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("serialization failed: {}", e))?;
    fs::write(path, json).map_err(|e| format!("failed to write config file: {}", e))?;
    Ok(())
}
