//! Console notifications.

use storefront_commerce::cart::CartLineItem;
use storefront_commerce::notify::{NotificationKind, Notifier, ADDED_TO_CART};

use crate::output::Output;

/// Prints store notifications as they happen.
///
/// A terminal has no screen to expire things from, so each notification is
/// printed once and forgotten.
pub struct ConsoleNotifier {
    output: Output,
}

impl ConsoleNotifier {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Success => self.output.success(message),
            NotificationKind::Error => self.output.error(message),
            NotificationKind::Info => self.output.info(message),
        }
    }

    fn notify_cart(&self, item: &CartLineItem) {
        self.output.success(ADDED_TO_CART);
        self.output.kv(&item.title, &item.price);
    }
}
