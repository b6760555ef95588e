//! # Runtime Flows
//!
//! Terminal commands through `StorefrontApp` with catalogs and themes read
//! from disk.

#[cfg(test)]
mod tests {
    use storefront_runtime::{Command, Reply, StorefrontApp, StorefrontConfig};

    const MAIZE_CATALOG: &str = r#"[
        {"id": "m1", "name": "Yellow Maize", "price": 2.5, "unit": "kg", "inStock": true},
        {"id": "m2", "name": "Maize Flour", "price": 3.75, "unit": "pack", "inStock": true},
        {"id": "m3", "name": "Green Maize Cobs", "price": 0.8, "unit": "each", "inStock": false}
    ]"#;

    const THEMES: &str = r#"{
        "fallback": {"accent": "a", "badge": "b", "icon": "*"},
        "categories": {"Kite11 Maize Farm": {"accent": "brown", "badge": "brown-light", "icon": "🌽"}}
    }"#;

    fn maize_config(root: &tempfile::TempDir) -> StorefrontConfig {
        let catalogs = root.path().join("catalogs");
        std::fs::create_dir_all(&catalogs).unwrap();
        std::fs::write(catalogs.join("kite11-maize-farm.json"), MAIZE_CATALOG).unwrap();
        let themes = root.path().join("themes.json");
        std::fs::write(&themes, THEMES).unwrap();

        StorefrontConfig {
            data_dir: root.path().join("carts"),
            catalog_dir: Some(catalogs),
            category: "Kite11  Maize Farm".to_string(),
            theme_file: Some(themes),
        }
    }

    fn run(app: &StorefrontApp, line: &str) -> Reply {
        let command = Command::parse(line).unwrap().unwrap();
        app.handle(command).unwrap()
    }

    #[tokio::test]
    async fn test_commands_drive_cart() {
        let root = tempfile::tempdir().unwrap();
        let config = maize_config(&root);
        config.validate().unwrap();
        let app = StorefrontApp::start(&config).await.unwrap();

        assert_eq!(app.category().as_str(), "kite11-maize-farm");
        assert_eq!(app.theme().icon, "🌽");

        run(&app, "+ m1");
        run(&app, "+ m1");
        let reply = run(&app, "add m2");
        let Reply::Output(summary) = reply else {
            panic!("expected output");
        };
        assert!(summary.contains("3 items"));
        assert!(summary.contains("Total: $8.75"));

        run(&app, "- m1");
        let Reply::Output(json) = run(&app, "json") else {
            panic!("expected output");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_items"], 2);
        assert_eq!(value["category"], "kite11-maize-farm");
        assert_eq!(value["state"], "Idle");

        assert_eq!(run(&app, "quit"), Reply::Quit);
    }

    #[tokio::test]
    async fn test_out_of_stock_and_unknown_products_rejected() {
        let root = tempfile::tempdir().unwrap();
        let app = StorefrontApp::start(&maize_config(&root)).await.unwrap();

        assert_eq!(
            run(&app, "+ m3"),
            Reply::Output("Green Maize Cobs is out of stock".into())
        );
        assert_eq!(app.snapshot().total_items, 0);
        assert!(!root.path().join("carts/kite11-maize-farm-cart.json").exists());
    }

    #[tokio::test]
    async fn test_missing_catalog_file_fails_start() {
        let root = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            category: "JJ Sheep n Goat Farm".to_string(),
            ..maize_config(&root)
        };
        let err = StorefrontApp::start(&config).await.err().unwrap();
        assert!(format!("{err:#}").contains("No catalog for category"));
    }
}
