//! Category filter for listing pages.

use crate::catalog::ProductCard;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Which cards a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every card.
    #[default]
    All,
    /// Cards in one category.
    Category(CategoryId),
}

impl CategoryFilter {
    /// Parse a filter value. `"all"` and blank mean every card.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(CategoryId::new(value))
        }
    }

    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        CategoryFilter::Category(id.into())
    }

    /// Check if `card` is visible under this filter.
    pub fn matches(&self, card: &ProductCard) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => card.category.as_ref() == Some(id),
        }
    }

    /// Announcement after the filter is applied.
    ///
    /// `label` is the text of the control that selected the category; the
    /// category id is used when there is none.
    pub fn announcement(&self, label: Option<&str>) -> String {
        match self {
            CategoryFilter::All => "Showing All Products".to_string(),
            CategoryFilter::Category(id) => {
                format!("Showing {}", label.unwrap_or_else(|| id.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(category: &str) -> ProductCard {
        ProductCard::new("Item", "₹1").with_category(category)
    }

    #[test]
    fn test_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("sarees"),
            CategoryFilter::category("sarees")
        );
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&card("sarees")));
        assert!(CategoryFilter::All.matches(&ProductCard::new("Loose", "₹1")));
    }

    #[test]
    fn test_category_matches_exactly() {
        let filter = CategoryFilter::category("sarees");
        assert!(filter.matches(&card("sarees")));
        assert!(!filter.matches(&card("kurtas")));
        assert!(!filter.matches(&ProductCard::new("Loose", "₹1")));
    }

    #[test]
    fn test_announcement() {
        assert_eq!(CategoryFilter::All.announcement(None), "Showing All Products");
        let filter = CategoryFilter::category("sarees");
        assert_eq!(filter.announcement(Some("Sarees")), "Showing Sarees");
        assert_eq!(filter.announcement(None), "Showing sarees");
    }
}
