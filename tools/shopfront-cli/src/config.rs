//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::presentation::PresentationConfig;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopfrontConfig {
    /// Catalog file, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Card and badge display thresholds.
    #[serde(default)]
    pub presentation: PresentationConfig,

    /// Directory the config was loaded from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl ShopfrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// The configured catalog path, resolved against the config's directory.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let catalog = self.catalog.as_ref()?;
        match &self.base_dir {
            Some(base) if catalog.is_relative() => Some(base.join(catalog)),
            _ => Some(catalog.clone()),
        }
    }
}
