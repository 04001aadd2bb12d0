//! Persisted cart.

use std::rc::Rc;

use crate::cart::{
    AddOutcome, Badge, Cart, CartLineItem, CartSummary, DetailSelection, NewLineItem,
};
use crate::catalog::ProductCard;
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::events::{CartChange, EventBus, StoreEvent, SubscriptionId};
use crate::money::{Currency, Money};
use crate::notify::{NotificationKind, Notifier};
use storefront_cache::{Cache, KvBackend};
use tracing::{debug, error, info, warn};

/// Shown when checkout is started.
pub const CHECKOUT_REDIRECT: &str = "Redirecting to checkout... (Demo)";
/// Shown when checkout is started with nothing in the cart.
pub const CHECKOUT_EMPTY: &str = "Your cart is empty";
/// Shown when the cart could not be written back.
pub const CART_SAVE_FAILED: &str = "Could not save your cart";

/// The cart, kept in sync with storage.
///
/// Every mutation writes the whole cart under the configured key, then
/// emits a [`StoreEvent::Cart`] carrying a fresh [`CartSummary`].
pub struct CartStore<B> {
    cache: Cache<B>,
    key: String,
    currency: Currency,
    default_size: String,
    cart: Cart,
    notifier: Rc<dyn Notifier>,
    events: EventBus,
}

impl<B: KvBackend> CartStore<B> {
    /// Load the cart from `cache`.
    ///
    /// A missing key is an empty cart. Stored text that does not parse is
    /// logged and discarded; it is overwritten on the next mutation.
    pub fn load(cache: Cache<B>, config: &StorefrontConfig, notifier: Rc<dyn Notifier>) -> Self {
        let key = config.storage.cart.clone();
        let cart = match cache.get::<Vec<CartLineItem>>(&key) {
            Ok(Some(items)) => Cart::from_items(items),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable cart state");
                Cart::new()
            }
        };
        debug!(lines = cart.len(), items = cart.item_count(), "cart loaded");

        Self {
            cache,
            key,
            currency: config.currency,
            default_size: config.default_size.clone(),
            cart,
            notifier,
            events: EventBus::new(),
        }
    }

    /// Add `quantity` of a product, merging with an existing line of the
    /// same id. Returns the position of the line.
    pub fn add_item(&mut self, item: NewLineItem, quantity: u32) -> Result<usize, CommerceError> {
        let outcome = self.cart.add_item(item, quantity)?;
        info!(
            index = outcome.index,
            merged = outcome.merged,
            quantity = outcome.quantity,
            "added to cart"
        );
        self.commit(CartChange::Added {
            index: outcome.index,
            merged: outcome.merged,
        })?;
        self.announce_add(&outcome);
        Ok(outcome.index)
    }

    /// Add one unit of the product on `card`.
    pub fn add_product(&mut self, card: &ProductCard) -> Result<usize, CommerceError> {
        self.add_item(card.to_line_item(), 1)
    }

    /// Add a detail-page selection as a new line. Never merges.
    pub fn add_from_detail(&mut self, selection: DetailSelection) -> Result<usize, CommerceError> {
        let line = selection.into_line_item(&self.default_size);
        let outcome = self.cart.push_line(line)?;
        info!(index = outcome.index, quantity = outcome.quantity, "added detail selection");
        self.commit(CartChange::Added {
            index: outcome.index,
            merged: false,
        })?;
        self.notifier.notify(
            &format!("Added {} item(s) to cart!", outcome.quantity),
            NotificationKind::Success,
        );
        Ok(outcome.index)
    }

    /// Overwrite the quantity at `index`.
    ///
    /// Returns `Ok(false)` and leaves everything untouched when `quantity`
    /// is below 1.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<bool, CommerceError> {
        if !self.cart.set_quantity(index, quantity)? {
            debug!(index, quantity, "rejected quantity below 1");
            return Ok(false);
        }
        self.commit(CartChange::QuantityChanged { index, quantity })?;
        Ok(true)
    }

    /// Add one to the quantity at `index`.
    pub fn increment_quantity(&mut self, index: usize) -> Result<u32, CommerceError> {
        let quantity = self.cart.increment_quantity(index)?;
        self.commit(CartChange::QuantityChanged { index, quantity })?;
        Ok(quantity)
    }

    /// Subtract one from the quantity at `index`; a no-op at 1.
    pub fn decrement_quantity(&mut self, index: usize) -> Result<bool, CommerceError> {
        if !self.cart.decrement_quantity(index)? {
            return Ok(false);
        }
        let quantity = self.cart.get(index).map(|i| i.quantity).unwrap_or(1);
        self.commit(CartChange::QuantityChanged { index, quantity })?;
        Ok(true)
    }

    /// Remove the line at `index`.
    pub fn remove_item(&mut self, index: usize) -> Result<CartLineItem, CommerceError> {
        let removed = self.cart.remove_item(index)?;
        info!(index, id = %removed.id, "removed from cart");
        self.commit(CartChange::Removed {
            index,
            id: removed.id.clone(),
        })?;
        Ok(removed)
    }

    /// Remove every line.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        info!("cart cleared");
        self.commit(CartChange::Cleared)
    }

    /// Start the simulated checkout. Returns false for an empty cart.
    ///
    /// Nothing is submitted and the cart is kept.
    pub fn checkout(&self) -> bool {
        if self.cart.is_empty() {
            self.notifier.notify(CHECKOUT_EMPTY, NotificationKind::Error);
            return false;
        }
        info!(items = self.cart.item_count(), "checkout started");
        self.notifier.notify(CHECKOUT_REDIRECT, NotificationKind::Info);
        true
    }

    /// Sum of `price * quantity`, with unparsable prices counted as zero.
    pub fn compute_total(&self) -> Money {
        self.cart.total(self.currency)
    }

    /// Sum of quantities.
    pub fn total_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Badge for the cart icon.
    pub fn badge(&self) -> Badge {
        Badge::new(self.cart.item_count())
    }

    /// Summary view of the current cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(&self.cart, self.currency)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    /// The cart itself.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Call `listener` after every cart mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Stop calling a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Persist, then tell listeners. Listeners hear about the change even
    /// when the write failed, since the in-memory cart did change.
    fn commit(&mut self, change: CartChange) -> Result<(), CommerceError> {
        let saved = self.persist();
        let event = StoreEvent::Cart {
            change,
            summary: self.summary(),
        };
        self.events.emit(&event);
        saved
    }

    fn persist(&self) -> Result<(), CommerceError> {
        if let Err(e) = self.cache.set(&self.key, &self.cart) {
            error!(key = %self.key, error = %e, "failed to persist cart");
            self.notifier.notify(CART_SAVE_FAILED, NotificationKind::Error);
            return Err(e.into());
        }
        Ok(())
    }

    fn announce_add(&self, outcome: &AddOutcome) {
        if let Some(item) = self.cart.get(outcome.index) {
            self.notifier.notify_cart(item);
        }
    }
}

impl<B> std::fmt::Debug for CartStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("currency", &self.currency)
            .field("cart", &self.cart)
            .field("events", &self.events)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Channel, NotificationCenter};
    use std::cell::RefCell;
    use storefront_cache::MemoryStore;

    fn open(store: &MemoryStore) -> (CartStore<MemoryStore>, Rc<NotificationCenter>) {
        let center = Rc::new(NotificationCenter::default());
        let cart = CartStore::load(
            Cache::new(store.clone()),
            &StorefrontConfig::default(),
            center.clone(),
        );
        (cart, center)
    }

    fn kurta() -> NewLineItem {
        NewLineItem::new("kurta", "Cotton Kurta", "₹1,200", "/img/kurta.jpg")
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let store = MemoryStore::new();
        let (mut cart, center) = open(&store);

        cart.add_item(kurta(), 1).unwrap();

        let raw = store.get("cartItems").unwrap().unwrap();
        assert!(raw.contains("\"kurta\""));
        let note = center.cart_notification().unwrap();
        assert_eq!(note.detail.as_deref(), Some("Cotton Kurta - ₹1,200"));
        assert_eq!(note.channel, Channel::Cart);
    }

    #[test]
    fn test_set_quantity_zero_leaves_storage_alone() {
        let store = MemoryStore::new();
        let (mut cart, _) = open(&store);
        cart.add_item(kurta(), 2).unwrap();
        let before = store.get("cartItems").unwrap();

        assert!(!cart.set_quantity(0, 0).unwrap());
        assert_eq!(store.get("cartItems").unwrap(), before);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_events_carry_summary() {
        let store = MemoryStore::new();
        let (mut cart, _) = open(&store);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cart.subscribe(move |event| {
            if let StoreEvent::Cart { change, summary } = event {
                sink.borrow_mut().push((change.clone(), summary.badge.count));
            }
        });

        cart.add_item(kurta(), 1).unwrap();
        cart.increment_quantity(0).unwrap();
        cart.remove_item(0).unwrap();

        let seen = seen.borrow();
        assert_eq!(
            seen[0],
            (
                CartChange::Added {
                    index: 0,
                    merged: false
                },
                1
            )
        );
        assert_eq!(seen[1], (CartChange::QuantityChanged { index: 0, quantity: 2 }, 2));
        assert!(matches!(seen[2].0, CartChange::Removed { index: 0, .. }));
        assert_eq!(seen[2].1, 0);
    }

    #[test]
    fn test_decrement_at_one_emits_nothing() {
        let store = MemoryStore::new();
        let (mut cart, _) = open(&store);
        cart.add_item(kurta(), 1).unwrap();

        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        cart.subscribe(move |_| *c.borrow_mut() += 1);

        assert!(!cart.decrement_quantity(0).unwrap());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_checkout() {
        let store = MemoryStore::new();
        let (mut cart, center) = open(&store);

        assert!(!cart.checkout());
        assert_eq!(center.active()[0].kind, NotificationKind::Error);

        cart.add_item(kurta(), 1).unwrap();
        assert!(cart.checkout());
        let last = center.active().pop().unwrap();
        assert_eq!(last.message, CHECKOUT_REDIRECT);
        assert_eq!(last.kind, NotificationKind::Info);
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_detail_add_message() {
        let store = MemoryStore::new();
        let (mut cart, center) = open(&store);

        cart.add_from_detail(DetailSelection {
            title: "Silk Saree".to_string(),
            price: "₹4,999".to_string(),
            image: String::new(),
            size: Some("L".to_string()),
            quantity: Some(3),
        })
        .unwrap();

        assert_eq!(center.active()[0].message, "Added 3 item(s) to cart!");
        assert_eq!(cart.items()[0].title, "Silk Saree (Size: L)");
    }
}
