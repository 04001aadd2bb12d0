//! Wishlist membership.
//!
//! The wishlist records which products are on it, so a reload restores
//! both the count and each product's toggle state. Storage written before
//! membership was kept holds only a number; those entries are carried as
//! `untracked` so the count a shopper saw does not drop on upgrade.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Direction of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistToggle {
    Added,
    Removed,
}

impl WishlistToggle {
    /// Message shown to the shopper after the toggle.
    pub fn message(&self) -> &'static str {
        match self {
            WishlistToggle::Added => "Added to wishlist!",
            WishlistToggle::Removed => "Removed from wishlist",
        }
    }
}

/// Products the shopper has wishlisted, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    members: Vec<ProductId>,
    untracked: u32,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored state.
    ///
    /// `stored_count` is the persisted counter. Any excess over the number of
    /// distinct members becomes untracked entries.
    pub fn from_parts(members: Vec<ProductId>, stored_count: u32) -> Self {
        let mut unique: Vec<ProductId> = Vec::with_capacity(members.len());
        for id in members {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        let tracked = u32::try_from(unique.len()).unwrap_or(u32::MAX);
        Self {
            members: unique,
            untracked: stored_count.saturating_sub(tracked),
        }
    }

    /// Flip membership of `product`.
    pub fn toggle(&mut self, product: &ProductId) -> WishlistToggle {
        if let Some(pos) = self.members.iter().position(|id| id == product) {
            self.members.remove(pos);
            WishlistToggle::Removed
        } else {
            self.members.push(product.clone());
            WishlistToggle::Added
        }
    }

    /// Check if `product` is wishlisted.
    pub fn contains(&self, product: &ProductId) -> bool {
        self.members.contains(product)
    }

    /// Number shown on the wishlist badge.
    pub fn count(&self) -> u32 {
        let tracked = u32::try_from(self.members.len()).unwrap_or(u32::MAX);
        tracked.saturating_add(self.untracked)
    }

    /// Wishlisted products in insertion order.
    pub fn members(&self) -> &[ProductId] {
        &self.members
    }

    /// Entries carried over from count-only storage.
    pub fn untracked(&self) -> u32 {
        self.untracked
    }

    /// Remove everything, untracked entries included.
    pub fn clear(&mut self) {
        self.members.clear();
        self.untracked = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_count() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new("lehenga");

        assert_eq!(wishlist.toggle(&id), WishlistToggle::Added);
        assert_eq!(wishlist.count(), 1);
        assert!(wishlist.contains(&id));

        assert_eq!(wishlist.toggle(&id), WishlistToggle::Removed);
        assert_eq!(wishlist.count(), 0);
    }

    #[test]
    fn test_messages() {
        assert_eq!(WishlistToggle::Added.message(), "Added to wishlist!");
        assert_eq!(WishlistToggle::Removed.message(), "Removed from wishlist");
    }

    #[test]
    fn test_from_parts_dedups_members() {
        let ids = vec![ProductId::new("a"), ProductId::new("a"), ProductId::new("b")];
        let wishlist = Wishlist::from_parts(ids, 2);
        assert_eq!(wishlist.members().len(), 2);
        assert_eq!(wishlist.untracked(), 0);
        assert_eq!(wishlist.count(), 2);
    }

    #[test]
    fn test_count_only_storage_is_untracked() {
        let mut wishlist = Wishlist::from_parts(Vec::new(), 3);
        assert_eq!(wishlist.count(), 3);

        wishlist.toggle(&ProductId::new("a"));
        assert_eq!(wishlist.count(), 4);

        wishlist.clear();
        assert_eq!(wishlist.count(), 0);
    }
}
