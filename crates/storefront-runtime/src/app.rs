//! # Storefront Application
//!
//! Wires one category view: catalog source → catalog, theme table → theme,
//! file store → cart session. Commands from the terminal are translated into
//! cart intents here.

use anyhow::{Context, Result};
use sf_01_cart_engine::{CartSession, CartSnapshot, CategoryId, FileCartStore};
use sf_02_catalog::{CatalogSource, CategoryTheme, JsonCatalogSource, StaticCatalogSource, ThemeTable};
use shared_types::Catalog;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::commands::{Command, HELP};
use crate::config::StorefrontConfig;
use crate::render::{render_products, render_summary};

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Output(String),
    /// Leave the command loop.
    Quit,
}

/// A running category view.
pub struct StorefrontApp {
    display_name: String,
    category: CategoryId,
    catalog: Arc<Catalog>,
    theme: CategoryTheme,
    session: CartSession<FileCartStore>,
}

impl StorefrontApp {
    /// Load the catalog and theme for the configured category and mount its
    /// cart.
    pub async fn start(config: &StorefrontConfig) -> Result<Self> {
        let category =
            CategoryId::from_display_name(&config.category).context("invalid category name")?;
        let display_name = config.category.trim().to_string();

        let source: Box<dyn CatalogSource> = match &config.catalog_dir {
            Some(dir) => Box::new(JsonCatalogSource::new(dir)),
            None => Box::new(StaticCatalogSource::farm_defaults().context("built-in catalogs")?),
        };
        let catalog = source
            .load_catalog(&category)
            .await
            .with_context(|| format!("loading catalog for {display_name}"))?;

        let themes = match &config.theme_file {
            Some(path) => ThemeTable::from_file(path)
                .with_context(|| format!("loading themes from {}", path.display()))?,
            None => ThemeTable::farm_defaults().context("built-in themes")?,
        };
        let theme = themes.theme_for(&category).clone();

        let store = FileCartStore::new(&config.data_dir);
        let catalog = Arc::new(catalog);
        let session = CartSession::mount(category.clone(), Arc::clone(&catalog), store);

        info!(
            category = %category,
            products = catalog.len(),
            data_dir = %config.data_dir.display(),
            "[runtime] category view mounted"
        );

        Ok(Self {
            display_name,
            category,
            catalog,
            theme,
            session,
        })
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn theme(&self) -> &CategoryTheme {
        &self.theme
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.session.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.session.subscribe()
    }

    /// Product list followed by the order summary.
    pub fn render(&self) -> String {
        let snapshot = self.session.snapshot();
        format!(
            "{}\n{}",
            render_products(&self.catalog, &snapshot, &self.theme),
            self.render_summary(&snapshot)
        )
    }

    pub fn render_summary(&self, snapshot: &CartSnapshot) -> String {
        render_summary(snapshot, &self.display_name, &self.theme)
    }

    /// Apply one command.
    ///
    /// Products that are unknown or out of stock cannot be added, and the
    /// cart cannot be cleared while an order is being placed; those are
    /// view rules, the cart itself accepts any id.
    pub fn handle(&self, command: Command) -> Result<Reply> {
        let snapshot = match command {
            Command::Add(id) => {
                match self.catalog.get(&id) {
                    None => return Ok(Reply::Output(format!("No product '{id}' in this category"))),
                    Some(product) if !product.in_stock => {
                        return Ok(Reply::Output(format!("{} is out of stock", product.name)))
                    }
                    Some(_) => self.session.add(&id),
                }
                self.session.snapshot()
            }
            Command::Remove(id) => {
                self.session.remove(&id);
                self.session.snapshot()
            }
            Command::Clear => {
                if self.session.snapshot().state.is_busy() {
                    return Ok(Reply::Output("Order in progress; cart cannot be cleared".into()));
                }
                self.session.clear();
                self.session.snapshot()
            }
            Command::Checkout => {
                if !self.session.checkout() {
                    return Ok(Reply::Output(
                        "Nothing to check out (cart empty or order in progress)".into(),
                    ));
                }
                self.session.snapshot()
            }
            Command::Show => return Ok(Reply::Output(self.render())),
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.session.snapshot())
                    .context("serializing cart snapshot")?;
                return Ok(Reply::Output(json));
            }
            Command::Help => return Ok(Reply::Output(HELP.to_string())),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(self.render_summary(&snapshot)))
    }

    /// Cancel any pending checkout timer.
    pub fn shutdown(&self) {
        self.session.shutdown();
        let metrics = self.session.metrics().snapshot();
        info!(
            category = %self.category,
            mutations = metrics.mutations,
            write_failures = metrics.write_failures,
            checkouts = metrics.checkouts_completed,
            "[runtime] category view closed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_01_cart_engine::CheckoutState;

    fn config(dir: &tempfile::TempDir) -> StorefrontConfig {
        StorefrontConfig {
            data_dir: dir.path().join("carts"),
            ..StorefrontConfig::default()
        }
    }

    #[tokio::test]
    async fn test_start_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let app = StorefrontApp::start(&config(&dir)).await.unwrap();

        assert_eq!(app.category().as_str(), "andrew-poultry-farm");
        assert!(app.render().contains("Free-Range Whole Chicken"));
        assert_eq!(app.snapshot().total_items, 0);
    }

    #[tokio::test]
    async fn test_unknown_category_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            category: "Nowhere Farm".to_string(),
            ..config(&dir)
        };
        assert!(StorefrontApp::start(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_view_rules() {
        let dir = tempfile::tempdir().unwrap();
        let app = StorefrontApp::start(&config(&dir)).await.unwrap();

        let reply = app.handle(Command::Add("p6".into())).unwrap();
        assert_eq!(reply, Reply::Output("Organic Chicken Wings is out of stock".into()));
        let reply = app.handle(Command::Add("zz".into())).unwrap();
        assert_eq!(reply, Reply::Output("No product 'zz' in this category".into()));
        assert_eq!(app.snapshot().total_items, 0);

        app.handle(Command::Add("p1".into())).unwrap();
        app.handle(Command::Add("p1".into())).unwrap();
        assert_eq!(app.snapshot().total_items, 2);
        assert_eq!(app.handle(Command::Quit).unwrap(), Reply::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_refused_during_checkout() {
        let dir = tempfile::tempdir().unwrap();
        let app = StorefrontApp::start(&config(&dir)).await.unwrap();
        app.handle(Command::Add("p4".into())).unwrap();

        let reply = app.handle(Command::Checkout).unwrap();
        assert!(matches!(reply, Reply::Output(text) if text.contains("Processing Order...")));

        let reply = app.handle(Command::Clear).unwrap();
        assert_eq!(
            reply,
            Reply::Output("Order in progress; cart cannot be cleared".into())
        );
        assert_eq!(app.snapshot().state, CheckoutState::Submitting);
        assert_eq!(app.snapshot().total_items, 1);
        app.shutdown();
    }

    #[tokio::test]
    async fn test_cart_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let app = StorefrontApp::start(&config(&dir)).await.unwrap();
            app.handle(Command::Add("p2".into())).unwrap();
            app.handle(Command::Add("p2".into())).unwrap();
        }

        let app = StorefrontApp::start(&config(&dir)).await.unwrap();
        assert_eq!(app.snapshot().total_items, 2);
        assert!(dir.path().join("carts/andrew-poultry-farm-cart.json").exists());
    }
}
