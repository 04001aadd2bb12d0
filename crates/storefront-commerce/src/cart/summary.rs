//! View models for the cart summary panel and count badges.
//!
//! Everything here is derived from a [`Cart`]; a renderer paints these and
//! never reads state back out of the page.

use crate::cart::Cart;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// Heading shown in an empty summary.
pub const EMPTY_CART_TITLE: &str = "Your cart is empty";
/// Hint shown under [`EMPTY_CART_TITLE`].
pub const EMPTY_CART_HINT: &str = "Add some products to get started!";

/// A numeric indicator on an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub count: u64,
    /// Badges are hidden at zero.
    pub visible: bool,
}

impl Badge {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            visible: count > 0,
        }
    }
}

/// Complete contents of the cart summary view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    /// e.g. "Shopping Cart (2)", counting lines rather than units.
    pub heading: String,
    /// One row per cart line.
    pub lines: Vec<SummaryLine>,
    /// Sum of line totals.
    pub total: Money,
    /// e.g. "Total: ₹2,450".
    pub total_text: String,
    /// Badge for the cart icon.
    pub badge: Badge,
}

impl CartSummary {
    /// Build the summary for `cart`, pricing lines in `currency`.
    pub fn from_cart(cart: &Cart, currency: Currency) -> Self {
        let lines: Vec<SummaryLine> = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| SummaryLine {
                index,
                id: item.id.clone(),
                title: item.title.clone(),
                price: item.price.clone(),
                image: item.image.clone(),
                quantity: item.quantity,
                line_total: item.line_total(currency),
                can_decrement: item.quantity > 1,
            })
            .collect();

        let total = cart.total(currency);
        Self {
            heading: format!("Shopping Cart ({})", lines.len()),
            lines,
            total,
            total_text: format!("Total: {}", total.display()),
            badge: Badge::new(cart.item_count()),
        }
    }

    /// Check if there is nothing to list.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One row of the summary view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    /// Position in the cart; quantity controls address lines by it.
    pub index: usize,
    pub id: ItemId,
    pub title: String,
    pub price: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: Money,
    /// False at quantity 1, where the minus control does nothing.
    pub can_decrement: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::NewLineItem;

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::from_cart(&Cart::new(), Currency::INR);
        assert!(summary.is_empty());
        assert_eq!(summary.heading, "Shopping Cart (0)");
        assert_eq!(summary.total_text, "Total: ₹0");
        assert!(!summary.badge.visible);
    }

    #[test]
    fn test_summary_lines_and_total() {
        let mut cart = Cart::new();
        cart.add_item(NewLineItem::new("a", "Kurta", "₹1,200", "/a.jpg"), 2)
            .unwrap();
        cart.add_item(NewLineItem::new("b", "Bangles", "₹50", "/b.jpg"), 1)
            .unwrap();

        let summary = CartSummary::from_cart(&cart, Currency::INR);
        assert_eq!(summary.heading, "Shopping Cart (2)");
        assert_eq!(summary.total_text, "Total: ₹2,450");
        assert_eq!(summary.badge, Badge::new(3));
        assert_eq!(summary.lines[0].line_total, Money::from_major(2400, Currency::INR));
        assert!(summary.lines[0].can_decrement);
        assert!(!summary.lines[1].can_decrement);
        assert_eq!(summary.lines[1].index, 1);
    }
}
