//! Domain service for the product catalog.
//!
//! Handlers depend on the [`ProductService`] trait rather than on the
//! database, so the store can be swapped for a test double.

use crate::models::product::{Product, ProductInput};
use thiserror::Error;

/// Errors surfaced by product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i32),

    /// Raw message from the underlying store or filesystem.
    #[error("{0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for ProductError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Record store operations over the products table.
///
/// Every operation is a single statement. Update and delete report the number
/// of rows they touched instead of failing when nothing matched.
#[async_trait::async_trait]
pub trait ProductService: Send + Sync {
    /// Lists every product in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Storage`] on query failure.
    async fn list(&self) -> Result<Vec<Product>, ProductError>;

    /// Fetches a single product.
    ///
    /// # Errors
    ///
    /// - Returns [`ProductError::NotFound`] if no row has this id
    /// - Returns [`ProductError::Storage`] on query failure
    async fn get(&self, id: i32) -> Result<Product, ProductError>;

    /// Inserts a product and returns it with its assigned id.
    async fn create(&self, input: ProductInput) -> Result<Product, ProductError>;

    /// Overwrites all mutable fields of a product. Returns rows affected.
    async fn update(&self, id: i32, input: ProductInput) -> Result<u64, ProductError>;

    /// Deletes a product. Returns rows affected.
    async fn delete(&self, id: i32) -> Result<u64, ProductError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), ProductError>;
}
