//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a cart line id where a product id is expected. All of them
//! serialize as bare strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a cart line.
    ///
    /// Equal to the product id on the generic add path; detail-page adds get
    /// a fresh `detail-` id so they never merge.
    ItemId
);
define_id!(
    /// Identifier carried by a product card.
    ProductId
);
define_id!(
    /// Identifier of a product category, as used in `?category=`.
    CategoryId
);

impl ItemId {
    /// Generate a fresh id for a detail-page add.
    pub fn detail() -> Self {
        Self(format!("detail-{}", generate_id()))
    }
}

impl From<ProductId> for ItemId {
    fn from(id: ProductId) -> Self {
        Self(id.into_inner())
    }
}

/// Generate a unique ID from the wall clock in milliseconds and a counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use web_time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    // Two ids minted in the same millisecond still differ.
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", millis, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("kurta-01");
        assert_eq!(id.as_str(), "kurta-01");
    }

    #[test]
    fn test_id_generation() {
        let id1 = ProductId::generate();
        let id2 = ProductId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_detail_ids_are_distinct() {
        let a = ItemId::detail();
        let b = ItemId::detail();
        assert!(a.as_str().starts_with("detail-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_id_carries_clock_millis() {
        let id = ItemId::detail();
        let mut parts = id.as_str().splitn(3, '-');
        assert_eq!(parts.next(), Some("detail"));
        let millis: u128 = parts.next().unwrap().parse().unwrap();
        assert!(millis > 0);
        assert!(parts.next().unwrap().parse::<u64>().is_ok());
    }

    #[test]
    fn test_product_id_becomes_item_id() {
        let item: ItemId = ProductId::new("saree-7").into();
        assert_eq!(item, ItemId::new("saree-7"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemId::new("x")).unwrap();
        assert_eq!(json, "\"x\"");
    }
}
