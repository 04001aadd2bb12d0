//! Page query parameters.

use crate::catalog::CategoryFilter;
use crate::ids::ProductId;

/// Parameters a storefront page reads from its URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// `?category=` on the listing page.
    pub category: Option<String>,
    /// `?id=` on the product-detail page.
    pub product_id: Option<ProductId>,
}

impl PageQuery {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Values are percent-decoded. Empty values count as absent and the
    /// first occurrence of a repeated key wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut page = PageQuery::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "category" if page.category.is_none() => {
                    page.category = Some(value.into_owned());
                }
                "id" if page.product_id.is_none() => {
                    page.product_id = Some(ProductId::new(value.into_owned()));
                }
                _ => {}
            }
        }
        page
    }

    /// Filter requested by `?category=`, if any.
    pub fn category_filter(&self) -> Option<CategoryFilter> {
        self.category.as_deref().map(CategoryFilter::parse)
    }
}
