//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// No line item at the given position.
    #[error("No cart item at index {index} (cart has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// A required form field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisting state failed.
    #[cfg(feature = "storage")]
    #[error("Storage error: {0}")]
    Storage(#[from] storefront_cache::CacheError),
}
