//! Common type definitions.
//!
//! - [`ProductId`]: product identifier, assigned by the store on creation
//! - [`Operation`]: the store operation a failure belongs to, used to give
//!   persistence errors their context

use serde::Serialize;
use std::fmt;

// Generated by the database (BIGINT identity column)
pub type ProductId = i64;

/// Operations the product store performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Read,
    List,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Create => "create product",
            Operation::Read => "get product",
            Operation::List => "list products",
            Operation::Update => "update product",
            Operation::Delete => "delete product",
        };
        write!(f, "{s}")
    }
}
