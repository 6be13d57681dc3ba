use crate::types::Operation;
use thiserror::Error;

/// Error type for product store operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// No product matches the given identifier
    #[error("Entity not found")]
    NotFound,

    /// The underlying database call (or decoding one of its rows) failed
    #[error("failed to {operation}: {source}")]
    Persistence {
        operation: Operation,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Wrap a driver error with the operation that produced it.
    ///
    /// `RowNotFound` is normalised to [`DbError::NotFound`] so callers never
    /// have to inspect driver errors to tell "absent" from "broken".
    pub fn persistence(operation: Operation, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            source => DbError::Persistence { operation, source },
        }
    }

    /// The operation that failed, if this is a persistence failure
    pub fn operation(&self) -> Option<Operation> {
        match self {
            DbError::NotFound => None,
            DbError::Persistence { operation, .. } => Some(*operation),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
