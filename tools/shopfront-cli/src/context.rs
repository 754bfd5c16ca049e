//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_commerce::catalog::Catalog;

use crate::config::{ShopfrontConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopfrontConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => ShopfrontConfig::load(path)?,
            None => Self::find_config(&cwd).unwrap_or_default(),
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<ShopfrontConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match ShopfrontConfig::load(&config_path) {
                        Ok(config) => {
                            tracing::debug!(path = %config_path.display(), "using config file");
                            return Some(config);
                        }
                        Err(e) => {
                            tracing::warn!(
                                path = %config_path.display(),
                                error = %e,
                                "skipping unreadable config"
                            );
                        }
                    }
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the catalog named on the command line, falling back to the config.
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<Catalog> {
        let path = match override_path {
            Some(path) => self.resolve_path(path),
            None => self.config.catalog_path().context(
                "No catalog configured: pass --catalog or set `catalog` in shopfront.toml",
            )?,
        };

        Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))
    }
}
