//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for:
//! - Decoding the path and JSON body (malformed input is rejected with 400)
//! - Calling the product store through [`crate::db::handlers::ProductRepository`]
//! - Serializing the response
//!
//! # Handler Modules
//!
//! - [`products`]: Product CRUD under `/api/v1/products`
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`] which converts to the appropriate
//! HTTP status code and a plain-text message.

pub mod products;
