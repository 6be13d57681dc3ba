//! Store trait for product persistence.

use crate::db::errors::Result;
use crate::db::models::products::{ProductCreateDBRequest, ProductDBResponse, ProductUpdateDBRequest};
use crate::types::ProductId;

/// The data access layer for products.
///
/// Implementations own all persistence; handlers only ever see the records
/// returned here. The trait is object safe so the application can hold an
/// `Arc<dyn ProductRepository>` and swap PostgreSQL for the in-memory store.
///
/// Cancellation follows the caller: dropping a returned future aborts the
/// pending operation.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product. `created_at` and `updated_at` are set by the store.
    async fn create(&self, request: &ProductCreateDBRequest) -> Result<ProductDBResponse>;

    /// Fetch one product, or [`DbError::NotFound`](crate::db::errors::DbError::NotFound)
    async fn get_by_id(&self, id: ProductId) -> Result<ProductDBResponse>;

    /// Fetch every product, ordered by id. An empty store is not an error.
    async fn list(&self) -> Result<Vec<ProductDBResponse>>;

    /// Replace all mutable fields and refresh `updated_at`.
    ///
    /// Returns whether a product matched; an unknown id is `Ok(false)`.
    async fn update(&self, id: ProductId, request: &ProductUpdateDBRequest) -> Result<bool>;

    /// Permanently remove a product. An unknown id is `Ok(false)`.
    async fn delete(&self, id: ProductId) -> Result<bool>;
}
