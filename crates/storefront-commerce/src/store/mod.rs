//! Persisted stores.
//!
//! These tie the in-memory cart and wishlist to a [`storefront_cache::Cache`],
//! a [`crate::notify::Notifier`] and an [`crate::events::EventBus`].

mod cart_store;
mod storefront;
mod wishlist_store;

pub use cart_store::{CartStore, CART_SAVE_FAILED, CHECKOUT_EMPTY, CHECKOUT_REDIRECT};
pub use storefront::Storefront;
pub use wishlist_store::{WishlistStore, WISHLIST_SAVE_FAILED};
