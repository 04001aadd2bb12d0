//! Key-Value store wrapper with automatic serialization.

use crate::{CacheError, KvBackend};
use serde::{de::DeserializeOwned, Serialize};
use tracing::trace;

/// Type-safe cache over a [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. A number is stored as its JSON text,
/// so a `u32` count of 3 is stored as the string `"3"`.
#[derive(Debug, Clone)]
pub struct Cache<B> {
    backend: B,
}

#[cfg(target_arch = "wasm32")]
impl Cache<crate::LocalStorage> {
    /// Open a cache over the browser's `localStorage`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open_default()?;
    /// ```
    pub fn open_default() -> Result<Self, CacheError> {
        Ok(Self::new(crate::LocalStorage::open()?))
    }
}

impl<B: KvBackend> Cache<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text is not valid JSON for `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<CartLineItem>> = cache.get("cartItems")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get the raw stored text.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.backend.get(key)
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("cartItems", &items)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        trace!(key, bytes = raw.len(), "cache write");
        self.backend.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.backend.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.backend.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_get_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<Vec<Line>> = cache.get("cartItems").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStore::new());
        let lines = vec![Line {
            id: "x".to_string(),
            quantity: 3,
        }];
        cache.set("cartItems", &lines).unwrap();

        let loaded: Vec<Line> = cache.get("cartItems").unwrap().unwrap();
        assert_eq!(loaded, lines);
    }

    #[test]
    fn test_numbers_stored_as_plain_text() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("wishlist", &4u32).unwrap();
        assert_eq!(cache.get_raw("wishlist").unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let store = MemoryStore::new();
        store.set("cartItems", "[{oops").unwrap();

        let cache = Cache::new(store);
        let result: Result<Option<Vec<Line>>, _> = cache.get("cartItems");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete_and_exists() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("wishlist", &1u32).unwrap();
        assert!(cache.exists("wishlist").unwrap());

        cache.delete("wishlist").unwrap();
        assert!(!cache.exists("wishlist").unwrap());
        assert!(cache.keys().unwrap().is_empty());
    }
}
