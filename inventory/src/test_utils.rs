//! Test fixtures, fake stores and the shared product store contract.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};

use crate::config::{Config, DatabaseConfig};
use crate::db::errors::{DbError, Result};
use crate::db::handlers::{InMemoryProducts, ProductRepository};
use crate::db::models::products::{ProductCreateDBRequest, ProductDBResponse, ProductUpdateDBRequest};
use crate::types::{Operation, ProductId};
use crate::{AppState, build_router};

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig::Memory,
        ..Default::default()
    }
}

/// Router over `store` with the test configuration, wrapped in a [`TestServer`].
pub fn create_test_server(store: Arc<dyn ProductRepository>) -> TestServer {
    let state = AppState::builder().products(store).config(create_test_config()).build();
    let router = build_router(&state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}

pub fn sample_create_request(name: &str) -> ProductCreateDBRequest {
    ProductCreateDBRequest {
        name: name.to_string(),
        category: "Dairy".to_string(),
        quantity: 10,
        unit: "Liter".to_string(),
        price: 2.5,
        expiry_date: None,
    }
}

/// Store whose every call fails with a pool timeout. Counts calls so tests can
/// assert that rejected requests never reached it.
#[derive(Debug, Default)]
pub struct FailingProducts {
    calls: AtomicUsize,
}

impl FailingProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self, operation: Operation) -> DbError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DbError::persistence(operation, sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl ProductRepository for FailingProducts {
    async fn create(&self, _request: &ProductCreateDBRequest) -> Result<ProductDBResponse> {
        Err(self.fail(Operation::Create))
    }

    async fn get_by_id(&self, _id: ProductId) -> Result<ProductDBResponse> {
        Err(self.fail(Operation::Read))
    }

    async fn list(&self) -> Result<Vec<ProductDBResponse>> {
        Err(self.fail(Operation::List))
    }

    async fn update(&self, _id: ProductId, _request: &ProductUpdateDBRequest) -> Result<bool> {
        Err(self.fail(Operation::Update))
    }

    async fn delete(&self, _id: ProductId) -> Result<bool> {
        Err(self.fail(Operation::Delete))
    }
}

/// In-memory store that sleeps before every call, for exercising request deadlines.
#[derive(Debug)]
pub struct DelayedProducts {
    inner: InMemoryProducts,
    delay: Duration,
}

impl DelayedProducts {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryProducts::new(),
            delay,
        }
    }
}

#[async_trait]
impl ProductRepository for DelayedProducts {
    async fn create(&self, request: &ProductCreateDBRequest) -> Result<ProductDBResponse> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(request).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<ProductDBResponse> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<ProductDBResponse>> {
        tokio::time::sleep(self.delay).await;
        self.inner.list().await
    }

    async fn update(&self, id: ProductId, request: &ProductUpdateDBRequest) -> Result<bool> {
        tokio::time::sleep(self.delay).await;
        self.inner.update(id, request).await
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete(id).await
    }
}

/// Behaviour every [`ProductRepository`] must share. Each store's test module
/// runs these against a fresh, empty store.
pub mod store_contract {
    use super::*;

    pub async fn create_then_get_round_trips(store: &dyn ProductRepository) {
        let expiry = Utc.with_ymd_and_hms(2030, 1, 15, 0, 0, 0).unwrap();
        let request = ProductCreateDBRequest {
            name: "Cheese".to_string(),
            category: "Dairy".to_string(),
            quantity: 50,
            unit: "kg".to_string(),
            price: 5.0,
            expiry_date: Some(expiry),
        };

        let created = store.create(&request).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Cheese");
        assert_eq!(created.category, "Dairy");
        assert_eq!(created.quantity, 50);
        assert_eq!(created.unit, "kg");
        assert_eq!(created.price, 5.0);
        assert_eq!(created.expiry_date, Some(expiry));
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    pub async fn absent_expiry_date_stays_absent(store: &dyn ProductRepository) {
        let created = store.create(&sample_create_request("Rice")).await.unwrap();

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.expiry_date, None);
    }

    pub async fn list_empty_store(store: &dyn ProductRepository) {
        assert!(store.list().await.unwrap().is_empty());
    }

    pub async fn list_returns_all_in_id_order(store: &dyn ProductRepository) {
        let milk = store.create(&sample_create_request("Milk")).await.unwrap();
        let cheese = store.create(&sample_create_request("Cheese")).await.unwrap();
        let rice = store.create(&sample_create_request("Rice")).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![milk, cheese, rice]);
    }

    pub async fn get_missing_is_not_found(store: &dyn ProductRepository) {
        let err = store.get_by_id(999_999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }

    pub async fn update_replaces_all_fields(store: &dyn ProductRepository) {
        let mut request = sample_create_request("Milk");
        request.expiry_date = Some(Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap());
        let created = store.create(&request).await.unwrap();

        let update = ProductUpdateDBRequest {
            name: "Yogurt".to_string(),
            category: "Dairy".to_string(),
            quantity: 80,
            unit: "liters".to_string(),
            price: 3.0,
            expiry_date: None,
        };
        assert!(store.update(created.id, &update).await.unwrap());

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Yogurt");
        assert_eq!(fetched.quantity, 80);
        assert_eq!(fetched.unit, "liters");
        assert_eq!(fetched.price, 3.0);
        assert_eq!(fetched.expiry_date, None);
        assert_eq!(fetched.created_at, created.created_at);
        assert!(fetched.updated_at >= created.updated_at);
    }

    pub async fn update_missing_is_silent(store: &dyn ProductRepository) {
        let update = ProductUpdateDBRequest {
            name: "Ghost".to_string(),
            category: String::new(),
            quantity: 0,
            unit: String::new(),
            price: 0.0,
            expiry_date: None,
        };

        assert!(!store.update(424_242, &update).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    pub async fn delete_then_get_is_not_found(store: &dyn ProductRepository) {
        let created = store.create(&sample_create_request("Milk")).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(matches!(store.get_by_id(created.id).await, Err(DbError::NotFound)));
    }

    pub async fn delete_missing_is_silent(store: &dyn ProductRepository) {
        let kept = store.create(&sample_create_request("Milk")).await.unwrap();

        assert!(!store.delete(kept.id + 1000).await.unwrap());
        assert_eq!(store.list().await.unwrap(), vec![kept]);
    }
}
