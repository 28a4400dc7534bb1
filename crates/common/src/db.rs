//! Shared database types for Second Brain
//!
//! Repositories classify raw sqlx failures through [`RepositoryError`] before
//! they reach handlers.

use crate::error::Error;
use thiserror::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    /// A foreign key points at a row that does not exist
    #[error("Referenced record does not exist")]
    MissingReference,

    #[error("Database connection error: {0}")]
    Connection(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::MissingReference
            }
            _ => RepositoryError::Connection(err),
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::MissingReference => {
                Error::Validation("Referenced record does not exist".to_string())
            }
            RepositoryError::Connection(e) => Error::Database(e),
        }
    }
}
