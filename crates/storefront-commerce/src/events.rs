//! Store change events and subscriptions.
//!
//! Each store owns one [`EventBus`]. Views subscribe once and rebuild from
//! the snapshot carried in the event; they never reach into the store.

use crate::cart::{Badge, CartSummary};
use crate::ids::{ItemId, ProductId};
use crate::wishlist::WishlistToggle;

/// What happened to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A product was added. The renderer pulses the cart icon on this.
    Added { index: usize, merged: bool },
    /// The quantity at `index` changed.
    QuantityChanged { index: usize, quantity: u32 },
    /// The line at `index` was removed.
    Removed { index: usize, id: ItemId },
    /// Every line was removed.
    Cleared,
}

/// What happened to the wishlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistChange {
    Toggled {
        product: ProductId,
        toggle: WishlistToggle,
    },
    Cleared,
}

/// A store change together with the state views need to redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Cart {
        change: CartChange,
        summary: CartSummary,
    },
    Wishlist {
        change: WishlistChange,
        badge: Badge,
    },
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Ordered list of listeners.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners run in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < before
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn cleared() -> StoreEvent {
        StoreEvent::Wishlist {
            change: WishlistChange::Cleared,
            badge: Badge::new(0),
        }
    }

    #[test]
    fn test_emit_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let a = Rc::clone(&seen);
        bus.subscribe(move |_| a.borrow_mut().push("a"));
        let b = Rc::clone(&seen);
        bus.subscribe(move |_| b.borrow_mut().push("b"));

        bus.emit(&cleared());
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();

        let c = Rc::clone(&count);
        let id = bus.subscribe(move |_| *c.borrow_mut() += 1);

        bus.emit(&cleared());
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(&cleared());

        assert_eq!(*count.borrow(), 1);
        assert!(bus.is_empty());
    }
}
