//! CLI execution context.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context as _, Result};
use storefront_cache::FileStore;
use storefront_commerce::catalog::{Catalog, ProductCard};
use storefront_commerce::store::Storefront;
use tracing::debug;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::notifier::ConsoleNotifier;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    storage_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, storage: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        debug!(config = ?config_path, "configuration loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            storage_override: storage.map(str::to_string),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Path of the storage file.
    pub fn storage_path(&self) -> PathBuf {
        let path = self
            .storage_override
            .as_deref()
            .unwrap_or(&self.config.cli.storage_path);
        self.resolve_path(path)
    }

    /// Open the persisted storefront, reporting notifications on the console.
    pub fn open_storefront(&self) -> Storefront<FileStore> {
        let store = FileStore::open(self.storage_path());
        let notifier = Rc::new(ConsoleNotifier::new(self.output.clone()));
        Storefront::open(store, self.config.storefront.clone(), notifier)
    }

    /// Read the product catalog from `path`, or from the configured file.
    pub fn load_catalog(&self, path: Option<&str>) -> Result<Catalog> {
        let Some(path) = path.or(self.config.cli.catalog.as_deref()) else {
            bail!("No catalog file given. Pass --catalog or set cli.catalog in the config.");
        };
        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let cards: Vec<ProductCard> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        Ok(Catalog::new(cards))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
