//! PostgreSQL repository for products.

use crate::db::errors::{DbError, Result};
use crate::db::handlers::repository::ProductRepository;
use crate::db::models::products::{ProductCreateDBRequest, ProductDBResponse, ProductUpdateDBRequest};
use crate::types::{Operation, ProductId};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, category, quantity, unit, price, expiry_date, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
    RETURNING id, name, category, quantity, unit, price, expiry_date, created_at, updated_at
"#;

const SELECT_PRODUCT_BY_ID: &str = r#"
    SELECT id, name, category, quantity, unit, price, expiry_date, created_at, updated_at
    FROM products
    WHERE id = $1
"#;

const SELECT_PRODUCTS: &str = r#"
    SELECT id, name, category, quantity, unit, price, expiry_date, created_at, updated_at
    FROM products
    ORDER BY id
"#;

// GREATEST keeps updated_at from moving backwards if the server clock does
const UPDATE_PRODUCT: &str = r#"
    UPDATE products
    SET name = $1, category = $2, quantity = $3, unit = $4, price = $5, expiry_date = $6,
        updated_at = GREATEST(NOW(), updated_at)
    WHERE id = $7
"#;

const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = $1";

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Product {
    id: ProductId,
    name: String,
    category: String,
    quantity: i32,
    unit: String,
    price: f64,
    expiry_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDBResponse {
    fn from(row: Product) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            quantity: row.quantity,
            unit: row.unit,
            price: row.price,
            expiry_date: row.expiry_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Product store backed by a shared PostgreSQL pool.
///
/// Each call checks a connection out of the pool for the duration of a single
/// statement, so the repository can be cloned freely across requests.
#[derive(Clone, Debug)]
pub struct Products {
    db: PgPool,
}

impl Products {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ProductRepository for Products {
    #[instrument(skip(self, request), fields(name = %request.name, category = %request.category), err)]
    async fn create(&self, request: &ProductCreateDBRequest) -> Result<ProductDBResponse> {
        let product = sqlx::query_as::<_, Product>(INSERT_PRODUCT)
            .bind(&request.name)
            .bind(&request.category)
            .bind(request.quantity)
            .bind(&request.unit)
            .bind(request.price)
            .bind(request.expiry_date)
            .fetch_one(&self.db)
            .await
            .map_err(|e| DbError::persistence(Operation::Create, e))?;

        Ok(product.into())
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&self, id: ProductId) -> Result<ProductDBResponse> {
        let product = sqlx::query_as::<_, Product>(SELECT_PRODUCT_BY_ID)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| DbError::persistence(Operation::Read, e))?
            .ok_or(DbError::NotFound)?;

        Ok(product.into())
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<ProductDBResponse>> {
        // fetch_all fails as a whole if any row fails to decode
        let products = sqlx::query_as::<_, Product>(SELECT_PRODUCTS)
            .fetch_all(&self.db)
            .await
            .map_err(|e| DbError::persistence(Operation::List, e))?;

        Ok(products.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, request), err)]
    async fn update(&self, id: ProductId, request: &ProductUpdateDBRequest) -> Result<bool> {
        let result = sqlx::query(UPDATE_PRODUCT)
            .bind(&request.name)
            .bind(&request.category)
            .bind(request.quantity)
            .bind(&request.unit)
            .bind(request.price)
            .bind(request.expiry_date)
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| DbError::persistence(Operation::Update, e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: ProductId) -> Result<bool> {
        let result = sqlx::query(DELETE_PRODUCT)
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| DbError::persistence(Operation::Delete, e))?;

        Ok(result.rows_affected() > 0)
    }
}
