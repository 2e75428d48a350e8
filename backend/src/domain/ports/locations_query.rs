//! Driving port for reading locations.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, Location, LocationId};

/// Read-only location use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationsQuery: Send + Sync {
    /// Fetch one location.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] when `id` is absent.
    async fn get(&self, id: LocationId) -> Result<Location, Error>;

    /// Fetch one page of locations. Unsorted requests are ordered by
    /// `createdAt` ascending.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] for an unknown
    /// sort property.
    async fn list(&self, request: PageRequest) -> Result<Page<Location>, Error>;
}
