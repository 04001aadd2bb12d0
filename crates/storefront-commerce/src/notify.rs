//! Transient shopper-facing notifications.
//!
//! Stores report outcomes through the [`Notifier`] trait. The
//! [`NotificationCenter`] implementation keeps the list a renderer shows:
//! general notifications stack, while at most one add-to-cart notification
//! is visible at a time. Expiry is driven by the renderer's clock through
//! [`NotificationCenter::advance_to`], so no timers are left running.

use std::cell::{Cell, RefCell};

use crate::cart::CartLineItem;
use crate::config::NotificationConfig;
use serde::{Deserialize, Serialize};

/// Heading of the add-to-cart notification.
pub const ADDED_TO_CART: &str = "Added to Cart!";

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
}

/// Where a notification is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Corner toasts that stack.
    General,
    /// The add-to-cart card, one at a time.
    Cart,
}

/// A notification on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub channel: Channel,
    pub kind: NotificationKind,
    pub message: String,
    /// Second line, used by the cart channel for "title - price".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Clock time at which the notification goes away.
    pub expires_at_ms: u64,
}

/// Sink for shopper-facing messages.
pub trait Notifier {
    /// Show `message` styled as `kind`.
    fn notify(&self, message: &str, kind: NotificationKind);

    /// Announce that `item` was added to the cart.
    fn notify_cart(&self, item: &CartLineItem) {
        self.notify(
            &format!("{}: {} - {}", ADDED_TO_CART, item.title, item.price),
            NotificationKind::Success,
        );
    }
}

/// In-memory notification list.
#[derive(Debug)]
pub struct NotificationCenter {
    config: NotificationConfig,
    now_ms: Cell<u64>,
    next_id: Cell<u64>,
    active: RefCell<Vec<Notification>>,
}

impl NotificationCenter {
    /// Create an empty center with the clock at zero.
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            now_ms: Cell::new(0),
            next_id: Cell::new(1),
            active: RefCell::new(Vec::new()),
        }
    }

    /// Move the clock to `now_ms` and drop expired notifications.
    ///
    /// The clock never moves backwards; an earlier time is ignored.
    pub fn advance_to(&self, now_ms: u64) {
        let now = now_ms.max(self.now_ms.get());
        self.now_ms.set(now);
        self.active.borrow_mut().retain(|n| n.expires_at_ms > now);
    }

    /// Current clock time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Notifications on screen, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.active.borrow().clone()
    }

    /// The add-to-cart notification, if one is showing.
    pub fn cart_notification(&self) -> Option<Notification> {
        self.active
            .borrow()
            .iter()
            .find(|n| n.channel == Channel::Cart)
            .cloned()
    }

    /// Close a notification early. Returns false if it was already gone.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut active = self.active.borrow_mut();
        let before = active.len();
        active.retain(|n| n.id != id);
        active.len() < before
    }

    /// Check if nothing is showing.
    pub fn is_empty(&self) -> bool {
        self.active.borrow().is_empty()
    }

    fn push(&self, channel: Channel, kind: NotificationKind, message: String, detail: Option<String>) {
        let lifetime = match channel {
            Channel::General => self.config.general_ms,
            Channel::Cart => self.config.cart_ms,
        };
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let mut active = self.active.borrow_mut();
        if channel == Channel::Cart {
            active.retain(|n| n.channel != Channel::Cart);
        }
        active.push(Notification {
            id,
            channel,
            kind,
            message,
            detail,
            expires_at_ms: self.now_ms.get().saturating_add(lifetime),
        });
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.push(Channel::General, kind, message.to_string(), None);
    }

    fn notify_cart(&self, item: &CartLineItem) {
        self.push(
            Channel::Cart,
            NotificationKind::Success,
            ADDED_TO_CART.to_string(),
            Some(format!("{} - {}", item.title, item.price)),
        );
    }
}
