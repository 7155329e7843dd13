//! Error handling utilities for repositories

use pool_core::{DomainError, Uid};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "pool not found" error
pub fn pool_not_found(id: Uid) -> DomainError {
    DomainError::PoolNotFound(id)
}
