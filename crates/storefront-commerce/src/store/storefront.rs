//! The storefront: every store a page needs, built once.

use std::rc::Rc;

use crate::catalog::{Catalog, CategoryFilter, PageQuery, ProductCard, NO_SEARCH_RESULTS};
use crate::config::StorefrontConfig;
use crate::contact::{ContactForm, CONTACT_SENT};
use crate::error::CommerceError;
use crate::notify::{NotificationKind, Notifier};
use crate::store::{CartStore, WishlistStore};
use storefront_cache::{Cache, KvBackend};
use tracing::{debug, info};

/// Owns the cart and wishlist stores and the notifier they share.
///
/// Construct one per page and hand references to whatever renders or reacts
/// to it.
pub struct Storefront<B> {
    config: StorefrontConfig,
    cart: CartStore<B>,
    wishlist: WishlistStore<B>,
    notifier: Rc<dyn Notifier>,
}

impl<B: KvBackend + Clone> Storefront<B> {
    /// Open both stores over `backend`.
    pub fn open(backend: B, config: StorefrontConfig, notifier: Rc<dyn Notifier>) -> Self {
        let cart = CartStore::load(Cache::new(backend.clone()), &config, Rc::clone(&notifier));
        let wishlist = WishlistStore::load(Cache::new(backend), &config, Rc::clone(&notifier));
        info!(
            cart_items = cart.total_item_count(),
            wishlist = wishlist.count(),
            "storefront opened"
        );
        Self {
            config,
            cart,
            wishlist,
            notifier,
        }
    }
}

impl<B: KvBackend> Storefront<B> {
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartStore<B> {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore<B> {
        &mut self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore<B> {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore<B> {
        &mut self.wishlist
    }

    /// Cards visible under `filter`, announcing the change.
    ///
    /// `label` is the text of the control that picked the filter.
    pub fn apply_category_filter<'c>(
        &self,
        catalog: &'c Catalog,
        filter: &CategoryFilter,
        label: Option<&str>,
    ) -> Vec<&'c ProductCard> {
        let visible = catalog.filter(filter);
        debug!(?filter, visible = visible.len(), "category filter applied");
        self.notifier
            .notify(&filter.announcement(label), NotificationKind::Success);
        visible
    }

    /// Search card titles. Reports when nothing matched.
    ///
    /// A blank term does nothing and returns no matches.
    pub fn search(&self, catalog: &Catalog, term: &str) -> Vec<usize> {
        match catalog.search(term) {
            None => Vec::new(),
            Some(matches) => {
                debug!(term, matches = matches.len(), "search");
                if matches.is_empty() {
                    self.notifier.notify(NO_SEARCH_RESULTS, NotificationKind::Success);
                }
                matches
            }
        }
    }

    /// Apply what a page URL asks for: the `category` filter, silently, and
    /// the product named by `id`, if the catalog has it.
    pub fn resolve_query<'c>(
        &self,
        catalog: &'c Catalog,
        query: &PageQuery,
    ) -> (Vec<&'c ProductCard>, Option<&'c ProductCard>) {
        let filter = query.category_filter().unwrap_or_default();
        let product = query.product_id.as_ref().and_then(|id| catalog.find(id));
        (catalog.filter(&filter), product)
    }

    /// Submit the contact form. Nothing is sent anywhere.
    pub fn submit_contact(&self, form: &ContactForm) -> Result<(), CommerceError> {
        if let Err(e) = form.validate() {
            self.notifier.notify(&e.to_string(), NotificationKind::Error);
            return Err(e);
        }
        info!("contact form submitted");
        self.notifier.notify(CONTACT_SENT, NotificationKind::Success);
        Ok(())
    }
}

impl<B> std::fmt::Debug for Storefront<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.config)
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .finish()
    }
}
