//! Driven port for location persistence adapters and their errors.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Location, LocationId, LocationListQuery, NewLocation};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by location repository adapters.
    pub enum LocationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "location repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "location repository query failed: {message}",
    }
}

/// Storage for location records.
///
/// Adapters assign identifiers on insert and never generate timestamps; the
/// domain service owns both `created_at` and `updated_at`. `created_at` is
/// written once, on insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert a new record and return it with its assigned identifier.
    async fn insert(&self, location: &NewLocation) -> Result<Location, LocationRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: LocationId)
    -> Result<Option<Location>, LocationRepositoryError>;

    /// Overwrite the descriptive fields and `updated_at` of an existing
    /// record. The stored `created_at` is never changed, whatever
    /// `location.created_at` holds.
    ///
    /// Returns `None` when no record with `location.id` exists.
    async fn update(&self, location: &Location)
    -> Result<Option<Location>, LocationRepositoryError>;

    /// Remove a record. Returns `false` when nothing was deleted.
    async fn delete(&self, id: LocationId) -> Result<bool, LocationRepositoryError>;

    /// Fetch one page of records in the query's order, breaking ties by
    /// ascending identifier, together with the total record count.
    async fn list(
        &self,
        query: &LocationListQuery,
    ) -> Result<Page<Location>, LocationRepositoryError>;
}
