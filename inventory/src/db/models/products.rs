use crate::types::ProductId;
use chrono::{DateTime, Utc};

/// Database request for creating a new product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreateDBRequest {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub price: f64,
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Database request for replacing every mutable field of a product.
///
/// There is no partial update: a `None` expiry date clears the stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdateDBRequest {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub price: f64,
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Database response for a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDBResponse {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub price: f64,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
