//! Type-safe key-value storage for storefront client state.
//!
//! Provides a simple, ergonomic API over a browser-style key-value area
//! with automatic JSON serialization. Three backends ship with the crate:
//!
//! - [`MemoryStore`] for tests and ephemeral sessions
//! - [`FileStore`] for running the storefront state outside a browser
//! - `LocalStorage` (wasm32 only) over the window's `localStorage`
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cartItems", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartLineItem>> = cache.get("cartItems")?;
//!
//! // Delete a value
//! cache.delete("cartItems")?;
//! ```

mod backend;
mod error;
mod kv;

#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorage;
pub use backend::{FileStore, KvBackend, MemoryStore};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvBackend, MemoryStore};
}
