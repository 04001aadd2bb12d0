//! Cart, wishlist and page state for a storefront client.
//!
//! This crate holds everything a storefront page keeps between clicks:
//!
//! - **Cart**: line items, quantities, totals and the summary a page renders
//! - **Wishlist**: product membership and the badge count
//! - **Catalog**: product cards, category filtering, search and URL queries
//! - **Notifications**: transient messages with clock-driven expiry
//! - **Store**: the above persisted through `storefront-cache` (feature `storage`)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use storefront_cache::MemoryStore;
//! use storefront_commerce::prelude::*;
//!
//! let notes = Rc::new(NotificationCenter::default());
//! let mut shop = Storefront::open(MemoryStore::new(), StorefrontConfig::default(), notes.clone());
//!
//! let card = ProductCard::new("Cotton Kurta", "₹1,225").with_id("kurta-1");
//! shop.cart_mut().add_product(&card)?;
//! shop.cart_mut().increment_quantity(0)?;
//!
//! println!("{}", shop.cart().summary().total_text); // Total: ₹2,450
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod events;
pub mod notify;
pub mod wishlist;

#[cfg(feature = "storage")]
pub mod store;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        Badge, Cart, CartLineItem, CartSummary, DetailSelection, NewLineItem, SummaryLine,
        MAX_QUANTITY_PER_ITEM,
    };

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, PageQuery, ProductCard};

    // Page state
    pub use crate::config::{NotificationConfig, StorageKeys, StorefrontConfig};
    pub use crate::contact::ContactForm;
    pub use crate::events::{CartChange, StoreEvent, SubscriptionId, WishlistChange};
    pub use crate::notify::{Notification, NotificationCenter, NotificationKind, Notifier};
    pub use crate::wishlist::{Wishlist, WishlistToggle};

    // Persisted stores
    #[cfg(feature = "storage")]
    pub use crate::store::{CartStore, Storefront, WishlistStore};
}
