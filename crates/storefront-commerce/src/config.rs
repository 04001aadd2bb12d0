//! Storefront configuration.

use std::path::Path;

use crate::error::CommerceError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Configuration shared by the stores.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Currency prices are parsed and totals shown in.
    #[serde(default)]
    pub currency: Currency,

    /// Size used for detail-page adds when none is selected.
    #[serde(default = "default_size")]
    pub default_size: String,

    /// Storage key names.
    #[serde(default)]
    pub storage: StorageKeys,

    /// Notification timing.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl StorefrontConfig {
    /// Load config from a file, as JSON when the extension is `.json` and
    /// TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        toml::from_str(content).map_err(|e| CommerceError::Config(e.to_string()))
    }

    /// Parse JSON config text.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        serde_json::from_str(content).map_err(|e| CommerceError::Config(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        toml::to_string_pretty(self).map_err(|e| CommerceError::Config(e.to_string()))
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            default_size: default_size(),
            storage: StorageKeys::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

fn default_size() -> String {
    "M".to_string()
}

/// Keys under which state is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    /// JSON array of cart lines.
    #[serde(default = "default_cart_key")]
    pub cart: String,

    /// Wishlist count as plain integer text.
    #[serde(default = "default_wishlist_count_key")]
    pub wishlist_count: String,

    /// JSON array of wishlisted product ids.
    #[serde(default = "default_wishlist_items_key")]
    pub wishlist_items: String,
}

fn default_cart_key() -> String {
    "cartItems".to_string()
}

fn default_wishlist_count_key() -> String {
    "wishlist".to_string()
}

fn default_wishlist_items_key() -> String {
    "wishlistItems".to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: default_cart_key(),
            wishlist_count: default_wishlist_count_key(),
            wishlist_items: default_wishlist_items_key(),
        }
    }
}

/// How long notifications stay on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Lifetime of general notifications in milliseconds.
    #[serde(default = "default_general_ms")]
    pub general_ms: u64,

    /// Lifetime of the add-to-cart notification in milliseconds.
    #[serde(default = "default_cart_ms")]
    pub cart_ms: u64,
}

fn default_general_ms() -> u64 {
    3000
}

fn default_cart_ms() -> u64 {
    4000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            general_ms: default_general_ms(),
            cart_ms: default_cart_ms(),
        }
    }
}
