//! Database layer for data persistence and access.
//!
//! The data access layer uses SQLx with PostgreSQL, behind a repository trait
//! so the store can be swapped for an in-memory one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (api::handlers - HTTP request handlers)
//! └──────┬──────┘
//!        │ Arc<dyn ProductRepository>
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries & row mapping)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository trait and its implementations
//! - [`models`]: Database record structures matching the `products` table
//! - [`errors`]: Database-specific error types
//!
//! # Schema
//!
//! The `products` table is defined in `migrations/`. The service expects it to
//! exist; apply it with `sqlx migrate run` or your own tooling.

pub mod errors;
pub mod handlers;
pub mod models;
