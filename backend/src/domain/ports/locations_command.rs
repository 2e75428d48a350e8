//! Driving port for location mutations.
//!
//! HTTP handlers call [`LocationsCommand`] to create, overwrite, or remove
//! records. Inputs arrive already validated as [`LocationDraft`]s.

use async_trait::async_trait;

use crate::domain::{Error, Location, LocationDraft, LocationId};

/// Use-cases that change stored locations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationsCommand: Send + Sync {
    /// Store a new location stamped with the current time.
    ///
    /// # Errors
    /// Returns a service-unavailable or internal error when persistence fails.
    async fn create(&self, draft: LocationDraft) -> Result<Location, Error>;

    /// Overwrite the descriptive fields of an existing location.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] when `id` is absent.
    async fn update(&self, id: LocationId, draft: LocationDraft) -> Result<Location, Error>;

    /// Permanently remove a location.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] when `id` is absent.
    async fn delete(&self, id: LocationId) -> Result<(), Error>;
}
