//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::config::StorefrontConfig;

/// Names searched for, in order, in each directory up the tree.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
///
/// The storefront settings sit at the top level so the same file can be
/// handed to [`StorefrontConfig::load`]; CLI-only settings live under `[cli]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(flatten)]
    pub storefront: StorefrontConfig,

    /// CLI settings.
    #[serde(default)]
    pub cli: CliSection,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Settings that only matter to the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSection {
    /// File holding persisted state, relative to the working directory.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,

    /// JSON file with the product cards `catalog` commands read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_storage_path() -> String {
    ".storefront/storage.json".to_string()
}

impl Default for CliSection {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            catalog: None,
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

currency = "INR"
default_size = "M"

[storage]
cart = "cartItems"
wishlist_count = "wishlist"
wishlist_items = "wishlistItems"

[notifications]
general_ms = 3000
cart_ms = 4000

[cli]
storage_path = ".storefront/storage.json"
# catalog = "products.json"
"#
    .to_string()
}
