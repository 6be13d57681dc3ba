//! In-memory product store.
//!
//! Keeps every product in a map behind an async lock. It's used by the HTTP
//! tests and by `database.type: memory` for running the service without
//! PostgreSQL. Products are lost on restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::db::errors::{DbError, Result};
use crate::db::handlers::repository::ProductRepository;
use crate::db::models::products::{ProductCreateDBRequest, ProductDBResponse, ProductUpdateDBRequest};
use crate::types::ProductId;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ProductId, ProductDBResponse>,
    // Last id handed out; ids are never reused, even after a delete
    last_id: ProductId,
}

/// In-memory implementation of [`ProductRepository`].
///
/// Clones share the same underlying table.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProducts {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProducts {
    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&self, request: &ProductCreateDBRequest) -> Result<ProductDBResponse> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now();
        let product = ProductDBResponse {
            id: table.last_id,
            name: request.name.clone(),
            category: request.category.clone(),
            quantity: request.quantity,
            unit: request.unit.clone(),
            price: request.price,
            expiry_date: request.expiry_date,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(product.id, product.clone());

        Ok(product)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&self, id: ProductId) -> Result<ProductDBResponse> {
        self.table.read().await.rows.get(&id).cloned().ok_or(DbError::NotFound)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<ProductDBResponse>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    #[instrument(skip(self, request), err)]
    async fn update(&self, id: ProductId, request: &ProductUpdateDBRequest) -> Result<bool> {
        let mut table = self.table.write().await;
        let Some(product) = table.rows.get_mut(&id) else {
            return Ok(false);
        };

        product.name = request.name.clone();
        product.category = request.category.clone();
        product.quantity = request.quantity;
        product.unit = request.unit.clone();
        product.price = request.price;
        product.expiry_date = request.expiry_date;
        product.updated_at = product.updated_at.max(Utc::now());

        Ok(true)
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: ProductId) -> Result<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
