//! Repository trait for URL mapping storage.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for identifier → URL mappings.
///
/// The store owns identifier uniqueness: an insert whose id already exists must
/// fail with [`AppError::StoreWriteFailed`] and leave the existing row untouched.
/// There is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreWriteFailed`] if the id already exists or the
    /// store rejects the row.
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by exact id match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn find_by_id(&self, id: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Lists every stored mapping ordered by id, descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Checks that the store answers queries.
    async fn health_check(&self) -> bool;
}
