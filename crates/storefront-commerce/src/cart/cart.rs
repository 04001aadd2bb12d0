//! Cart and line item types.

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A line in the cart.
///
/// `price` stays a display string because that is what product cards carry;
/// it is parsed on demand when totals are computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    /// Line identifier.
    pub id: ItemId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Formatted unit price, e.g. "₹1,200".
    pub price: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Quantity, at least 1.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
}

/// Accept any stored JSON number and clamp it into
/// `1..=MAX_QUANTITY_PER_ITEM`, so one odd line never rejects the whole cart.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredQuantity {
        Whole(i64),
        Fractional(f64),
    }

    let quantity = match StoredQuantity::deserialize(deserializer)? {
        StoredQuantity::Whole(n) => n,
        // `as` saturates and maps NaN to 0.
        StoredQuantity::Fractional(f) => f as i64,
    };
    let clamped = quantity.clamp(1, i64::from(MAX_QUANTITY_PER_ITEM));
    Ok(u32::try_from(clamped).unwrap_or(MAX_QUANTITY_PER_ITEM))
}

impl CartLineItem {
    /// Parsed unit price. Unparsable prices are zero.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::parse_display(&self.price, currency)
    }

    /// Unit price times quantity.
    pub fn line_total(&self, currency: Currency) -> Money {
        self.unit_price(currency)
            .saturating_multiply(i64::from(self.quantity))
    }
}

/// A product to put in the cart, before it has a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub id: ItemId,
    pub title: String,
    pub price: String,
    pub image: String,
}

impl NewLineItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            image: image.into(),
        }
    }

    fn with_quantity(self, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            quantity,
        }
    }
}

/// What the product-detail page submits: the product plus a size and a
/// quantity picked by the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSelection {
    pub title: String,
    pub price: String,
    pub image: String,
    /// Selected size; the configured default applies when none is active.
    pub size: Option<String>,
    /// Quantity input; missing or zero means 1.
    pub quantity: Option<u32>,
}

impl DetailSelection {
    /// Build the cart line for this selection under a fresh id.
    pub fn into_line_item(self, default_size: &str) -> CartLineItem {
        let size = self
            .size
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| default_size.to_string());
        let quantity = self.quantity.filter(|q| *q > 0).unwrap_or(1);

        CartLineItem {
            id: ItemId::detail(),
            title: format!("{} (Size: {})", self.title, size),
            price: self.price,
            image: self.image,
            quantity,
        }
    }
}

/// Result of adding to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Position of the affected line.
    pub index: usize,
    /// True when an existing line was incremented instead of appended.
    pub merged: bool,
    /// Quantity of the line after the add.
    pub quantity: u32,
}

/// An ordered list of cart lines.
///
/// Serializes as a bare JSON array, the format kept under the `cartItems`
/// storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored lines, clamping each quantity into
    /// `1..=MAX_QUANTITY_PER_ITEM`.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let items = items
            .into_iter()
            .map(|mut item| {
                item.quantity = item.quantity.clamp(1, MAX_QUANTITY_PER_ITEM);
                item
            })
            .collect();
        Self { items }
    }

    /// Add a product, merging into an existing line with the same id.
    pub fn add_item(
        &mut self,
        item: NewLineItem,
        quantity: u32,
    ) -> Result<AddOutcome, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        if let Some(index) = self.items.iter().position(|i| i.id == item.id) {
            let existing = &mut self.items[index];
            let new_quantity = existing.quantity.saturating_add(quantity);
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    i64::from(new_quantity),
                    i64::from(MAX_QUANTITY_PER_ITEM),
                ));
            }
            existing.quantity = new_quantity;
            return Ok(AddOutcome {
                index,
                merged: true,
                quantity: new_quantity,
            });
        }

        check_limit(quantity)?;
        self.items.push(item.with_quantity(quantity));
        Ok(AddOutcome {
            index: self.items.len() - 1,
            merged: false,
            quantity,
        })
    }

    /// Append a line without merging. Used for detail-page adds.
    pub fn push_line(&mut self, item: CartLineItem) -> Result<AddOutcome, CommerceError> {
        if item.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        check_limit(item.quantity)?;
        let quantity = item.quantity;
        self.items.push(item);
        Ok(AddOutcome {
            index: self.items.len() - 1,
            merged: false,
            quantity,
        })
    }

    /// Overwrite the quantity at `index`.
    ///
    /// A quantity below 1 is rejected: the cart is left unchanged and
    /// `Ok(false)` is returned. Removing a line takes `remove_item`.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<bool, CommerceError> {
        let item = self.line_mut(index)?;
        if quantity < 1 {
            return Ok(false);
        }
        check_limit(quantity)?;
        item.quantity = quantity;
        Ok(true)
    }

    /// Add one to the quantity at `index`, returning the new quantity.
    pub fn increment_quantity(&mut self, index: usize) -> Result<u32, CommerceError> {
        let item = self.line_mut(index)?;
        let quantity = item.quantity + 1;
        check_limit(quantity)?;
        item.quantity = quantity;
        Ok(quantity)
    }

    /// Subtract one from the quantity at `index`.
    ///
    /// Returns `Ok(false)` without change when the quantity is already 1.
    pub fn decrement_quantity(&mut self, index: usize) -> Result<bool, CommerceError> {
        let item = self.line_mut(index)?;
        if item.quantity <= 1 {
            return Ok(false);
        }
        item.quantity -= 1;
        Ok(true)
    }

    /// Remove and return the line at `index`.
    pub fn remove_item(&mut self, index: usize) -> Result<CartLineItem, CommerceError> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.items.remove(index))
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line at `index`.
    pub fn get(&self, index: usize) -> Option<&CartLineItem> {
        self.items.get(index)
    }

    /// Position of the line with `id`.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    /// All lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Total of `price * quantity` over all lines.
    ///
    /// Never fails: unparsable prices count as zero and the sum saturates.
    pub fn total(&self, currency: Currency) -> Money {
        let amount = self
            .items
            .iter()
            .map(|i| i.line_total(currency).amount_minor)
            .fold(0_i64, |acc, v| acc.saturating_add(v));
        Money::new(amount, currency)
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut CartLineItem, CommerceError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CommerceError::IndexOutOfRange { index, len })
    }

    fn out_of_range(&self, index: usize) -> CommerceError {
        CommerceError::IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }
}

fn check_limit(quantity: u32) -> Result<(), CommerceError> {
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(
            i64::from(quantity),
            i64::from(MAX_QUANTITY_PER_ITEM),
        ));
    }
    Ok(())
}
