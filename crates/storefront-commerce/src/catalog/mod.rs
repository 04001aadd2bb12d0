//! Product catalog module.
//!
//! Contains product cards, the category filter, page query parsing and
//! title search over the cards on a page.

mod filter;
mod product;
mod query;

pub use filter::CategoryFilter;
pub use product::ProductCard;
pub use query::PageQuery;

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Message shown when a search matches nothing.
pub const NO_SEARCH_RESULTS: &str = "No products found matching your search.";

/// The product cards on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    cards: Vec<ProductCard>,
}

impl Catalog {
    /// Create a catalog from cards in page order.
    pub fn new(cards: Vec<ProductCard>) -> Self {
        Self { cards }
    }

    /// All cards in page order.
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// Card with the given product id.
    pub fn find(&self, id: &ProductId) -> Option<&ProductCard> {
        self.cards.iter().find(|c| c.id.as_ref() == Some(id))
    }

    /// Cards visible under `filter`, in page order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&ProductCard> {
        self.cards.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Positions of cards whose title contains `term`, ignoring case.
    ///
    /// Returns `None` for a blank term, which is not a search at all.
    pub fn search(&self, term: &str) -> Option<Vec<usize>> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }
        Some(
            self.cards
                .iter()
                .enumerate()
                .filter(|(_, c)| c.title.to_lowercase().contains(&term))
                .map(|(i, _)| i)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
