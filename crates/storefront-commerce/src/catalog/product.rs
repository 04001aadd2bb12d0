//! Product card data.

use crate::cart::NewLineItem;
use crate::ids::{CategoryId, ItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The data behind one product card on a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCard {
    /// Product identifier, when the card carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Product title.
    pub title: String,
    /// Formatted price, e.g. "₹1,200".
    pub price: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Category the card is listed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
}

impl ProductCard {
    /// Create a card without id or category.
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            price: price.into(),
            image: String::new(),
            category: None,
        }
    }

    /// Set the product id.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Parsed price.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::parse_display(&self.price, currency)
    }

    /// Cart input for this card.
    ///
    /// A card without an id gets a generated one, so repeated adds of such a
    /// card produce separate lines.
    pub fn to_line_item(&self) -> NewLineItem {
        let id = match &self.id {
            Some(id) => ItemId::from(id.clone()),
            None => ItemId::generate(),
        };
        NewLineItem::new(id, self.title.clone(), self.price.clone(), self.image.clone())
    }
}
