//! # Cart Flows
//!
//! Catalog source, cart engine and file store working together across
//! simulated page reloads.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use sf_01_cart_engine::{
        decode_ledger, CartApi, CartEngine, CategoryId, FileCartStore, InMemoryCartStore,
    };
    use shared_types::{Catalog, Price};

    use crate::integration::fixtures::{poultry, poultry_catalog, POULTRY_SLOT};

    // =========================================================================
    // RELOADS
    // =========================================================================

    #[tokio::test]
    async fn test_cart_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = poultry_catalog().await;

        {
            let mut engine =
                CartEngine::mount(poultry(), Arc::clone(&catalog), FileCartStore::new(dir.path()));
            engine.add("p1");
            engine.add("p1");
            engine.add("p4");
            engine.add("p9");
            engine.remove("p9");
        }

        let engine = CartEngine::mount(poultry(), catalog, FileCartStore::new(dir.path()));
        assert_eq!(engine.quantity_of("p1"), 2);
        assert_eq!(engine.quantity_of("p4"), 1);
        assert_eq!(engine.quantity_of("p9"), 0);
        assert_eq!(engine.total_item_count(), 3);
        assert_eq!(engine.total_price(), Price::from_cents(2 * 1299 + 499));

        let raw = std::fs::read_to_string(dir.path().join(format!("{POULTRY_SLOT}.json"))).unwrap();
        assert_eq!(raw, r#"{"p1":2,"p4":1}"#);
    }

    #[tokio::test]
    async fn test_categories_do_not_share_carts() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = poultry_catalog().await;
        let maize = CategoryId::from_display_name("Kite11 Maize Farm").unwrap();

        let mut poultry_cart =
            CartEngine::mount(poultry(), Arc::clone(&catalog), FileCartStore::new(dir.path()));
        let mut maize_cart =
            CartEngine::mount(maize.clone(), Arc::new(Catalog::empty()), FileCartStore::new(dir.path()));

        poultry_cart.add("p1");
        maize_cart.add("m1");
        maize_cart.add("m1");

        assert_eq!(poultry_cart.quantity_of("m1"), 0);
        assert_eq!(maize_cart.quantity_of("p1"), 0);
        assert!(dir.path().join("andrew-poultry-farm-cart.json").exists());
        assert!(dir.path().join("kite11-maize-farm-cart.json").exists());

        let reloaded = CartEngine::mount(maize, Arc::new(Catalog::empty()), FileCartStore::new(dir.path()));
        assert_eq!(reloaded.quantity_of("m1"), 2);
        assert_eq!(reloaded.total_price(), Price::ZERO);
    }

    #[tokio::test]
    async fn test_punctuated_category_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = poultry_catalog().await;

        for name in ["Mama's Dairy", "Fruits & Veg"] {
            let category = CategoryId::from_display_name(name).unwrap();
            {
                let mut engine = CartEngine::mount(
                    category.clone(),
                    Arc::clone(&catalog),
                    FileCartStore::new(dir.path()),
                );
                engine.add("p1");
                engine.add("p1");
                assert_eq!(engine.metrics().snapshot().write_failures, 0);
            }

            let engine = CartEngine::mount(category, Arc::clone(&catalog), FileCartStore::new(dir.path()));
            assert_eq!(engine.quantity_of("p1"), 2, "{name} after reload");
        }
        assert!(dir.path().join("mama's-dairy-cart.json").exists());
        assert!(dir.path().join("fruits-&-veg-cart.json").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_recovers_empty() {
        let dir = tempfile::tempdir().unwrap();
        let slot = dir.path().join(format!("{POULTRY_SLOT}.json"));
        std::fs::write(&slot, r#"{"p1": -2}"#).unwrap();

        let mut engine =
            CartEngine::mount(poultry(), poultry_catalog().await, FileCartStore::new(dir.path()));
        assert_eq!(engine.total_item_count(), 0);
        assert!(!slot.exists());

        engine.add("p3");
        assert_eq!(std::fs::read_to_string(&slot).unwrap(), r#"{"p3":1}"#);
    }

    #[tokio::test]
    async fn test_stale_entries_count_but_do_not_price() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(format!("{POULTRY_SLOT}.json")),
            r#"{"p2":1,"discontinued":4}"#,
        )
        .unwrap();

        let engine =
            CartEngine::mount(poultry(), poultry_catalog().await, FileCartStore::new(dir.path()));
        assert_eq!(engine.total_item_count(), 5);
        assert_eq!(engine.total_price(), Price::from_cents(1599));
        assert_eq!(engine.line_items().len(), 1);
        assert_eq!(engine.stale_entries().len(), 1);
        assert_eq!(engine.stale_entries()[0].as_str(), "discontinued");
    }

    #[tokio::test]
    async fn test_unwritable_store_keeps_cart_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("carts");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut engine =
            CartEngine::mount(poultry(), poultry_catalog().await, FileCartStore::new(&blocker));
        engine.add("p5");
        engine.add("p5");

        assert_eq!(engine.quantity_of("p5"), 2);
        assert_eq!(engine.metrics().snapshot().write_failures, 2);
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    #[derive(Debug, Clone)]
    enum Intent {
        Add(usize),
        Remove(usize),
        Clear,
    }

    const IDS: [&str; 4] = ["p1", "p4", "p8", "gone"];

    fn intent() -> impl Strategy<Value = Intent> {
        prop_oneof![
            4 => (0..IDS.len()).prop_map(Intent::Add),
            3 => (0..IDS.len()).prop_map(Intent::Remove),
            1 => Just(Intent::Clear),
        ]
    }

    proptest! {
        #[test]
        fn prop_slot_always_matches_ledger(intents in prop::collection::vec(intent(), 0..40)) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let catalog = rt.block_on(poultry_catalog());
            let store = Arc::new(InMemoryCartStore::new());
            let mut engine = CartEngine::mount(poultry(), catalog, Arc::clone(&store));

            for intent in intents {
                match intent {
                    Intent::Add(i) => engine.add(IDS[i]),
                    Intent::Remove(i) => engine.remove(IDS[i]),
                    Intent::Clear => engine.clear(),
                }
                let persisted = store.peek(POULTRY_SLOT).map(|raw| decode_ledger(&raw).unwrap());
                prop_assert_eq!(persisted.as_ref(), Some(engine.ledger()));
            }
        }
    }
}
