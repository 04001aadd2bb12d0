//! End-to-end behaviour of the persisted storefront state.
//!
//! Each test opens a [`Storefront`] over a backend, acts on it, then opens a
//! second one over the same backend to observe what a page reload would see.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_cache::{CacheError, FileStore, KvBackend, MemoryStore};
use storefront_commerce::notify::Channel;
use storefront_commerce::prelude::*;
use storefront_commerce::store::{CART_SAVE_FAILED, CHECKOUT_EMPTY};

fn open<B: KvBackend + Clone>(backend: B) -> (Storefront<B>, Rc<NotificationCenter>) {
    let notes = Rc::new(NotificationCenter::default());
    let shop = Storefront::open(backend, StorefrontConfig::default(), notes.clone());
    (shop, notes)
}

fn kurta() -> ProductCard {
    ProductCard::new("Cotton Kurta", "₹1,225").with_id("kurta-1")
}

fn saree() -> ProductCard {
    ProductCard::new("Silk Saree", "₹4,999").with_id("saree-1")
}

#[test]
fn stored_cart_is_restored_on_load() {
    let backend = MemoryStore::new();
    backend
        .set(
            "cartItems",
            r#"[{"id":"x","title":"T","price":"₹10","quantity":3}]"#,
        )
        .unwrap();

    let (shop, _) = open(backend);
    let cart = shop.cart();

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].image, "");
    assert_eq!(cart.badge(), Badge::new(3));
    assert_eq!(cart.compute_total().display(), "₹30");
}

#[test]
fn out_of_range_stored_quantity_keeps_the_rest_of_the_cart() {
    let backend = MemoryStore::new();
    backend
        .set(
            "cartItems",
            r#"[{"id":"a","title":"A","price":"₹100","quantity":2},
                {"id":"detail-1","title":"B (Size: M)","price":"₹50","quantity":-2}]"#,
        )
        .unwrap();

    let (shop, _) = open(backend);
    let items = shop.cart().items();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1].quantity, 1);
    assert_eq!(shop.cart().compute_total().display(), "₹250");
}

#[test]
fn adding_twice_merges_and_totals() {
    let (mut shop, _) = open(MemoryStore::new());

    shop.cart_mut().add_product(&kurta()).unwrap();
    shop.cart_mut().add_product(&kurta()).unwrap();

    let summary = shop.cart().summary();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].quantity, 2);
    assert_eq!(summary.heading, "Shopping Cart (1)");
    assert_eq!(summary.total_text, "Total: ₹2,450");
    assert_eq!(summary.badge.count, 2);
}

#[test]
fn unparsable_price_counts_as_zero() {
    let (mut shop, _) = open(MemoryStore::new());

    shop.cart_mut()
        .add_product(&ProductCard::new("Gift Wrap", "Free").with_id("wrap"))
        .unwrap();
    shop.cart_mut().add_product(&kurta()).unwrap();

    assert_eq!(shop.cart().compute_total().display(), "₹1,225");
    assert_eq!(shop.cart().total_item_count(), 2);
}

#[test]
fn corrupt_cart_loads_empty_and_is_overwritten() {
    let backend = MemoryStore::new();
    backend.set("cartItems", "{not json").unwrap();

    let (mut shop, _) = open(backend.clone());
    assert!(shop.cart().items().is_empty());
    assert!(!shop.cart().badge().visible);

    shop.cart_mut().add_product(&saree()).unwrap();
    let (reloaded, _) = open(backend);
    assert_eq!(reloaded.cart().items()[0].title, "Silk Saree");
}

#[test]
fn quantity_changes_survive_reload() {
    let backend = MemoryStore::new();
    let (mut shop, _) = open(backend.clone());

    shop.cart_mut().add_product(&kurta()).unwrap();
    shop.cart_mut().add_product(&saree()).unwrap();
    shop.cart_mut().set_quantity(0, 4).unwrap();
    shop.cart_mut().decrement_quantity(0).unwrap();
    shop.cart_mut().remove_item(1).unwrap();

    let (reloaded, _) = open(backend);
    let items = reloaded.cart().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::new("kurta-1"));
    assert_eq!(items[0].quantity, 3);
}

#[test]
fn detail_adds_never_merge() {
    let (mut shop, notes) = open(MemoryStore::new());
    let selection = || DetailSelection {
        title: "Silk Saree".to_string(),
        price: "₹4,999".to_string(),
        image: String::new(),
        size: None,
        quantity: None,
    };

    shop.cart_mut().add_from_detail(selection()).unwrap();
    shop.cart_mut().add_from_detail(selection()).unwrap();

    let items = shop.cart().items();
    assert_eq!(items.len(), 2);
    assert_ne!(items[0].id, items[1].id);
    assert_eq!(items[0].title, "Silk Saree (Size: M)");
    assert_eq!(notes.active()[0].message, "Added 1 item(s) to cart!");
}

#[test]
fn wishlist_membership_survives_reload() {
    let backend = MemoryStore::new();
    let (mut shop, _) = open(backend.clone());
    let saree_id = ProductId::new("saree-1");

    shop.wishlist_mut().toggle(&saree_id).unwrap();
    shop.wishlist_mut().toggle(&ProductId::new("kurta-1")).unwrap();
    shop.wishlist_mut().toggle(&ProductId::new("kurta-1")).unwrap();

    let (reloaded, _) = open(backend);
    assert!(reloaded.wishlist().contains(&saree_id));
    assert!(!reloaded.wishlist().contains(&ProductId::new("kurta-1")));
    assert_eq!(reloaded.wishlist().count(), 1);
    assert_eq!(reloaded.wishlist().badge(), Badge::new(1));
}

#[test]
fn empty_checkout_is_refused() {
    let (shop, notes) = open(MemoryStore::new());

    assert!(!shop.cart().checkout());
    let note = &notes.active()[0];
    assert_eq!(note.message, CHECKOUT_EMPTY);
    assert_eq!(note.kind, NotificationKind::Error);
}

#[test]
fn cart_notification_replaces_previous_and_expires() {
    let (mut shop, notes) = open(MemoryStore::new());

    shop.cart_mut().add_product(&kurta()).unwrap();
    notes.advance_to(1000);
    shop.cart_mut().add_product(&saree()).unwrap();

    let cart_notes: Vec<_> = notes
        .active()
        .into_iter()
        .filter(|n| n.channel == Channel::Cart)
        .collect();
    assert_eq!(cart_notes.len(), 1);
    assert_eq!(cart_notes[0].detail.as_deref(), Some("Silk Saree - ₹4,999"));

    notes.advance_to(4999);
    assert!(notes.cart_notification().is_some());
    notes.advance_to(5000);
    assert!(notes.cart_notification().is_none());
}

#[test]
fn file_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let (mut shop, _) = open(FileStore::open(&path));
        shop.cart_mut().add_product(&kurta()).unwrap();
        shop.cart_mut().increment_quantity(0).unwrap();
        shop.wishlist_mut().toggle(&ProductId::new("saree-1")).unwrap();
    }

    let (shop, _) = open(FileStore::open(&path));
    assert_eq!(shop.cart().total_item_count(), 2);
    assert_eq!(shop.wishlist().count(), 1);
}

#[test]
fn config_changes_storage_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storefront.toml");
    std::fs::write(
        &path,
        "currency = \"USD\"\n\n[storage]\ncart = \"bag\"\n",
    )
    .unwrap();

    let config = StorefrontConfig::load(&path).unwrap();
    assert_eq!(config.currency, Currency::USD);
    assert_eq!(config.storage.wishlist_count, "wishlist");

    let backend = MemoryStore::new();
    let notes = Rc::new(NotificationCenter::default());
    let mut shop = Storefront::open(backend.clone(), config, notes);
    shop.cart_mut()
        .add_product(&ProductCard::new("Mug", "$12.50").with_id("mug"))
        .unwrap();

    assert!(backend.exists("bag").unwrap());
    assert!(!backend.exists("cartItems").unwrap());
    assert_eq!(shop.cart().compute_total().display(), "$12.50");
}

/// A backend whose writes always fail, like a full `localStorage`.
#[derive(Clone, Default)]
struct FullStore;

impl KvBackend for FullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Err(CacheError::StoreError("quota exceeded".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(Vec::new())
    }
}

#[test]
fn failed_write_is_reported_but_state_changes() {
    let (mut shop, notes) = open(FullStore);

    let events = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&events);
    shop.cart_mut().subscribe(move |_| *seen.borrow_mut() += 1);

    let result = shop.cart_mut().add_product(&kurta());
    assert!(matches!(result, Err(CommerceError::Storage(_))));

    assert_eq!(shop.cart().total_item_count(), 1);
    assert_eq!(*events.borrow(), 1);
    assert!(notes
        .active()
        .iter()
        .any(|n| n.message == CART_SAVE_FAILED && n.kind == NotificationKind::Error));
}
