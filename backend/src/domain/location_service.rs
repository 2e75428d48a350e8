//! Location domain service.
//!
//! Implements the [`LocationsCommand`] and [`LocationsQuery`] driving ports on
//! top of a [`LocationRepository`]. The service owns existence checks,
//! timestamps, and the default listing order.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    LocationRepository, LocationRepositoryError, LocationsCommand, LocationsQuery,
};
use crate::domain::{
    Error, Location, LocationDraft, LocationId, LocationListQuery, NewLocation,
    UnknownSortProperty,
};

/// Location service implementing the driving ports.
pub struct LocationService<R: ?Sized> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: ?Sized> LocationService<R> {
    /// Create a service over `repository`, reading time from `clock`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::LocationService;
    /// use backend::outbound::memory::InMemoryLocationRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = LocationService::new(
    ///     Arc::new(InMemoryLocationRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_repository_error(error: LocationRepositoryError) -> Error {
    match error {
        LocationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("location repository unavailable: {message}"))
        }
        LocationRepositoryError::Query { message } => {
            Error::internal(format!("location repository error: {message}"))
        }
    }
}

fn unknown_sort_error(error: UnknownSortProperty) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": "sort",
        "value": error.property,
        "code": "unknown_sort_property",
    }))
}

fn missing_location(id: LocationId) -> Error {
    warn!(location_id = %id, "location not found");
    Error::not_found(format!("Location is not exists with given id: {id}"))
}

impl<R> LocationService<R>
where
    R: LocationRepository + ?Sized,
{
    async fn find(&self, id: LocationId) -> Result<Option<Location>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> LocationsCommand for LocationService<R>
where
    R: LocationRepository + ?Sized,
{
    async fn create(&self, draft: LocationDraft) -> Result<Location, Error> {
        let new = NewLocation {
            draft,
            created_at: self.clock.utc(),
        };
        let location = self
            .repository
            .insert(&new)
            .await
            .map_err(map_repository_error)?;
        info!(location_id = %location.id, "location created");
        Ok(location)
    }

    async fn update(&self, id: LocationId, draft: LocationDraft) -> Result<Location, Error> {
        let not_found = || {
            warn!(location_id = %id, "location not found for update");
            Error::not_found(format!("Location does not exist with given id: {id}"))
        };

        let existing = self.find(id).await?.ok_or_else(not_found)?;
        let revised = existing.revise(draft, self.clock.utc());
        let stored = self
            .repository
            .update(&revised)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)?;
        info!(location_id = %id, "location updated");
        Ok(stored)
    }

    async fn delete(&self, id: LocationId) -> Result<(), Error> {
        if self.find(id).await?.is_none() {
            return Err(missing_location(id));
        }
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(missing_location(id));
        }
        info!(location_id = %id, "location deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> LocationsQuery for LocationService<R>
where
    R: LocationRepository + ?Sized,
{
    async fn get(&self, id: LocationId) -> Result<Location, Error> {
        let location = self.find(id).await?.ok_or_else(|| missing_location(id))?;
        info!(location_id = %id, "location fetched");
        Ok(location)
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Location>, Error> {
        let query = LocationListQuery::from_request(request).map_err(unknown_sort_error)?;
        let page = self
            .repository
            .list(&query)
            .await
            .map_err(map_repository_error)?;
        info!(
            page = page.number(),
            size = page.size(),
            total_elements = page.total_elements(),
            "locations listed"
        );
        Ok(page)
    }
}

#[cfg(test)]
#[path = "location_service_tests.rs"]
mod tests;
