//! Repository implementations for product persistence.
//!
//! # Design Pattern
//!
//! Every store:
//! - Implements the [`ProductRepository`] trait
//! - Handles query construction and parameter binding
//! - Returns records from [`crate::db::models`]
//! - Wraps failures in [`crate::db::errors::DbError`] with the failed operation
//!
//! # Available Repositories
//!
//! - [`Products`]: PostgreSQL, backed by a shared `PgPool`
//! - [`InMemoryProducts`]: process-local map, for tests and `database.type: memory`
//!
//! # Usage
//!
//! ```ignore
//! use inventory::db::handlers::{ProductRepository, Products};
//!
//! async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = Products::new(pool);
//!     for product in repo.list().await? {
//!         println!("{} x{}", product.name, product.quantity);
//!     }
//!     Ok(())
//! }
//! ```

pub mod in_memory;
pub mod products;
pub mod repository;

pub use in_memory::InMemoryProducts;
pub use products::Products;
pub use repository::ProductRepository;
