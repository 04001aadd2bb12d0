//! Persisted wishlist.

use std::rc::Rc;

use crate::cart::Badge;
use crate::config::{StorageKeys, StorefrontConfig};
use crate::error::CommerceError;
use crate::events::{EventBus, StoreEvent, SubscriptionId, WishlistChange};
use crate::ids::ProductId;
use crate::notify::{NotificationKind, Notifier};
use crate::wishlist::{Wishlist, WishlistToggle};
use storefront_cache::{Cache, KvBackend};
use tracing::{debug, error, info, warn};

/// Shown when the wishlist could not be written back.
pub const WISHLIST_SAVE_FAILED: &str = "Could not save your wishlist";

/// The wishlist, kept in sync with storage.
///
/// Two keys are written on every change: the count as plain integer text,
/// which older pages read for the badge, and the member ids as a JSON array.
pub struct WishlistStore<B> {
    cache: Cache<B>,
    keys: StorageKeys,
    wishlist: Wishlist,
    notifier: Rc<dyn Notifier>,
    events: EventBus,
}

impl<B: KvBackend> WishlistStore<B> {
    /// Load the wishlist from `cache`. Unreadable values count as empty.
    pub fn load(cache: Cache<B>, config: &StorefrontConfig, notifier: Rc<dyn Notifier>) -> Self {
        let keys = config.storage.clone();

        let members = match cache.get::<Vec<ProductId>>(&keys.wishlist_items) {
            Ok(members) => members.unwrap_or_default(),
            Err(e) => {
                warn!(key = %keys.wishlist_items, error = %e, "discarding unreadable wishlist members");
                Vec::new()
            }
        };
        let stored_count = match cache.get::<u32>(&keys.wishlist_count) {
            Ok(count) => count.unwrap_or(0),
            Err(e) => {
                warn!(key = %keys.wishlist_count, error = %e, "discarding unreadable wishlist count");
                0
            }
        };

        let wishlist = Wishlist::from_parts(members, stored_count);
        if wishlist.untracked() > 0 {
            debug!(untracked = wishlist.untracked(), "wishlist has entries without ids");
        }

        Self {
            cache,
            keys,
            wishlist,
            notifier,
            events: EventBus::new(),
        }
    }

    /// Flip `product` on or off the wishlist.
    pub fn toggle(&mut self, product: &ProductId) -> Result<WishlistToggle, CommerceError> {
        let toggle = self.wishlist.toggle(product);
        info!(product = %product, ?toggle, count = self.wishlist.count(), "wishlist toggled");

        self.commit(WishlistChange::Toggled {
            product: product.clone(),
            toggle,
        })?;
        self.notifier.notify(toggle.message(), NotificationKind::Success);
        Ok(toggle)
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.wishlist.clear();
        info!("wishlist cleared");
        self.commit(WishlistChange::Cleared)
    }

    /// Check if `product` is wishlisted.
    pub fn contains(&self, product: &ProductId) -> bool {
        self.wishlist.contains(product)
    }

    /// Number of wishlisted products.
    pub fn count(&self) -> u32 {
        self.wishlist.count()
    }

    /// Badge for the wishlist icon.
    pub fn badge(&self) -> Badge {
        Badge::new(u64::from(self.wishlist.count()))
    }

    /// The wishlist itself.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Call `listener` after every wishlist mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Stop calling a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn commit(&mut self, change: WishlistChange) -> Result<(), CommerceError> {
        let saved = self.persist();
        let event = StoreEvent::Wishlist {
            change,
            badge: self.badge(),
        };
        self.events.emit(&event);
        saved
    }

    fn persist(&self) -> Result<(), CommerceError> {
        // Members first: a count without its members would load as untracked.
        let result = self
            .cache
            .set(&self.keys.wishlist_items, &self.wishlist.members())
            .and_then(|_| {
                self.cache
                    .set(&self.keys.wishlist_count, &self.wishlist.count())
            });
        if let Err(e) = result {
            error!(error = %e, "failed to persist wishlist");
            self.notifier.notify(WISHLIST_SAVE_FAILED, NotificationKind::Error);
            return Err(e.into());
        }
        Ok(())
    }
}

impl<B> std::fmt::Debug for WishlistStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("keys", &self.keys)
            .field("wishlist", &self.wishlist)
            .field("events", &self.events)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationCenter;
    use storefront_cache::{CacheError, MemoryStore};

    fn open(store: &MemoryStore) -> (WishlistStore<MemoryStore>, Rc<NotificationCenter>) {
        let center = Rc::new(NotificationCenter::default());
        let wishlist = WishlistStore::load(
            Cache::new(store.clone()),
            &StorefrontConfig::default(),
            center.clone(),
        );
        (wishlist, center)
    }

    #[test]
    fn test_toggle_writes_both_keys() {
        let store = MemoryStore::new();
        let (mut wishlist, center) = open(&store);

        wishlist.toggle(&ProductId::new("saree-1")).unwrap();

        assert_eq!(store.get("wishlist").unwrap().as_deref(), Some("1"));
        assert_eq!(
            store.get("wishlistItems").unwrap().as_deref(),
            Some("[\"saree-1\"]")
        );
        assert_eq!(center.active()[0].message, "Added to wishlist!");
    }

    #[test]
    fn test_toggle_twice_never_negative() {
        let store = MemoryStore::new();
        let (mut wishlist, center) = open(&store);
        let id = ProductId::new("saree-1");

        wishlist.toggle(&id).unwrap();
        assert_eq!(wishlist.toggle(&id).unwrap(), WishlistToggle::Removed);

        assert_eq!(wishlist.count(), 0);
        assert_eq!(store.get("wishlist").unwrap().as_deref(), Some("0"));
        assert_eq!(center.active()[1].message, "Removed from wishlist");
    }

    #[test]
    fn test_legacy_count_only_storage() {
        let store = MemoryStore::new();
        store.set("wishlist", "2").unwrap();

        let (wishlist, _) = open(&store);
        assert_eq!(wishlist.count(), 2);
        assert!(wishlist.badge().visible);
    }

    #[test]
    fn test_garbage_count_loads_as_zero() {
        let store = MemoryStore::new();
        store.set("wishlist", "NaN").unwrap();

        let (wishlist, _) = open(&store);
        assert_eq!(wishlist.count(), 0);
    }

    /// Accepts every write except those to one key.
    #[derive(Clone)]
    struct RejectKey {
        inner: MemoryStore,
        key: &'static str,
    }

    impl KvBackend for RejectKey {
        fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
            if key == self.key {
                return Err(CacheError::StoreError("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn delete(&self, key: &str) -> Result<(), CacheError> {
            self.inner.delete(key)
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            self.inner.keys()
        }
    }

    #[test]
    fn test_failed_member_write_leaves_no_stray_count() {
        let store = MemoryStore::new();
        let failing = RejectKey {
            inner: store.clone(),
            key: "wishlistItems",
        };
        let center = Rc::new(NotificationCenter::default());
        let mut wishlist = WishlistStore::load(
            Cache::new(failing),
            &StorefrontConfig::default(),
            center.clone(),
        );

        assert!(wishlist.toggle(&ProductId::new("saree-1")).is_err());
        assert_eq!(store.get("wishlist").unwrap(), None);

        let (reloaded, _) = open(&store);
        assert_eq!(reloaded.count(), 0);
        assert_eq!(reloaded.wishlist().untracked(), 0);
    }
}
