//! JSON representation of a product.

use crate::db::models::products::{ProductCreateDBRequest, ProductDBResponse, ProductUpdateDBRequest};
use crate::types::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product held in the inventory.
///
/// The same shape is used for request and response bodies. On input `id`,
/// `created_at` and `updated_at` are ignored, and any missing field takes its
/// zero value: updates replace every field, so omitting one clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Product {
    /// Unique identifier, assigned by the server
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Product category (e.g. Dairy, Meat, Grains)
    pub category: String,
    /// Available stock
    pub quantity: i32,
    /// Measurement unit (kg, liters, pieces)
    pub unit: String,
    /// Price per unit
    pub price: f64,
    /// Expiration date, for perishable goods only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = "date-time")]
    pub expiry_date: Option<DateTime<Utc>>,
    /// When the product was added
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ProductDBResponse> for Product {
    fn from(db: ProductDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            category: db.category,
            quantity: db.quantity,
            unit: db.unit,
            price: db.price,
            expiry_date: db.expiry_date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<&Product> for ProductCreateDBRequest {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            quantity: product.quantity,
            unit: product.unit.clone(),
            price: product.price,
            expiry_date: product.expiry_date,
        }
    }
}

impl From<&Product> for ProductUpdateDBRequest {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            quantity: product.quantity,
            unit: product.unit.clone(),
            price: product.price,
            expiry_date: product.expiry_date,
        }
    }
}
