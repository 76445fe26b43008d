//! `SeaORM` implementation of the `ProductService` trait.

use crate::db::Store;
use crate::models::product::{Product, ProductInput};
use crate::services::product_service::{ProductError, ProductService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmProductService {
    store: Store,
}

impl SeaOrmProductService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductService for SeaOrmProductService {
    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        let rows = self.store.product_repo().list_all().await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Product, ProductError> {
        self.store
            .product_repo()
            .get(id)
            .await?
            .map(Product::from)
            .ok_or(ProductError::NotFound(id))
    }

    async fn create(&self, input: ProductInput) -> Result<Product, ProductError> {
        let model = self.store.product_repo().insert(input).await?;
        info!(id = model.id, name = ?model.name, "Created product");
        Ok(Product::from(model))
    }

    async fn update(&self, id: i32, input: ProductInput) -> Result<u64, ProductError> {
        let changes = self.store.product_repo().overwrite(id, input).await?;
        info!(id, changes, "Updated product");
        Ok(changes)
    }

    async fn delete(&self, id: i32) -> Result<u64, ProductError> {
        let changes = self.store.product_repo().remove(id).await?;
        info!(id, changes, "Deleted product");
        Ok(changes)
    }

    async fn ping(&self) -> Result<(), ProductError> {
        self.store
            .ping()
            .await
            .map_err(|e| ProductError::Storage(e.to_string()))
    }
}
