use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AssetService, ProductService, SeaOrmProductService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub products: Arc<dyn ProductService>,

    pub assets: Arc<AssetService>,
}

impl SharedState {
    /// Opens the database, creates the products table if needed and prepares
    /// the upload directory.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let products =
            Arc::new(SeaOrmProductService::new(store)) as Arc<dyn ProductService + 'static>;

        let state = Self::with_product_service(config, products);
        state.assets.ensure_directory().await?;
        Ok(state)
    }

    /// Builds state around an existing product service, e.g. a test double.
    #[must_use]
    pub fn with_product_service(config: Config, products: Arc<dyn ProductService>) -> Self {
        let assets = Arc::new(AssetService::new(&config.uploads));
        Self {
            config: Arc::new(config),
            products,
            assets,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
