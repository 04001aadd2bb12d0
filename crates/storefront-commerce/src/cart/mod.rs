//! Shopping cart module.
//!
//! Contains the cart, its line items, and the summary view model.

mod cart;
mod summary;

pub use cart::{
    AddOutcome, Cart, CartLineItem, DetailSelection, NewLineItem, MAX_QUANTITY_PER_ITEM,
};
pub use summary::{Badge, CartSummary, SummaryLine, EMPTY_CART_HINT, EMPTY_CART_TITLE};
