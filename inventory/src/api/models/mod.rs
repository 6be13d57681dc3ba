//! API request and response data models.
//!
//! These types define the public JSON contract and are kept separate from the
//! database records in [`crate::db::models`]. All models derive `utoipa`'s
//! `ToSchema` for the generated OpenAPI document.

pub mod products;
