//! Process-local `LocationRepository` used when no database is configured.
//!
//! Records live in a `BTreeMap` keyed by identifier behind a mutex and vanish
//! when the process exits. Ordering mirrors the Diesel adapter: the query's
//! orders first, then ascending identifier.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Direction, Page};

use crate::domain::ports::{LocationRepository, LocationRepositoryError};
use crate::domain::{
    Location, LocationId, LocationListQuery, LocationOrder, LocationSortKey, NewLocation,
};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<LocationId, Location>,
}

/// In-memory implementation of [`LocationRepository`].
///
/// # Examples
/// ```
/// use backend::outbound::memory::InMemoryLocationRepository;
///
/// let repository = InMemoryLocationRepository::new();
/// # let _ = repository;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLocationRepository {
    store: Mutex<Store>,
}

impl InMemoryLocationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, LocationRepositoryError> {
        self.store
            .lock()
            .map_err(|_| LocationRepositoryError::query("in-memory location store is poisoned"))
    }
}

fn compare_by(key: LocationSortKey, left: &Location, right: &Location) -> Ordering {
    match key {
        LocationSortKey::Id => left.id.cmp(&right.id),
        LocationSortKey::Name => left.name.cmp(&right.name),
        LocationSortKey::Neighborhood => left.neighborhood.cmp(&right.neighborhood),
        LocationSortKey::City => left.city.cmp(&right.city),
        LocationSortKey::State => left.state.cmp(&right.state),
        LocationSortKey::CreatedAt => left.created_at.cmp(&right.created_at),
        LocationSortKey::UpdatedAt => left.updated_at.cmp(&right.updated_at),
    }
}

fn compare(orders: &[LocationOrder], left: &Location, right: &Location) -> Ordering {
    orders
        .iter()
        .map(|order| {
            let ordering = compare_by(order.key, left, right);
            match order.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| left.id.cmp(&right.id))
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn insert(&self, location: &NewLocation) -> Result<Location, LocationRepositoryError> {
        let mut store = self.lock()?;
        store.last_id += 1;
        let id = LocationId::new(store.last_id);
        let stored = Location::from_new(id, location.clone());
        store.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: LocationId,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        location: &Location,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        let mut store = self.lock()?;
        Ok(store.rows.get_mut(&location.id).map(|row| {
            row.name.clone_from(&location.name);
            row.neighborhood.clone_from(&location.neighborhood);
            row.city.clone_from(&location.city);
            row.state.clone_from(&location.state);
            row.updated_at = location.updated_at;
            row.clone()
        }))
    }

    async fn delete(&self, id: LocationId) -> Result<bool, LocationRepositoryError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }

    async fn list(
        &self,
        query: &LocationListQuery,
    ) -> Result<Page<Location>, LocationRepositoryError> {
        let store = self.lock()?;
        let mut rows: Vec<&Location> = store.rows.values().collect();
        rows.sort_by(|left, right| compare(query.orders(), left, right));

        let request = query.request();
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = rows
            .into_iter()
            .skip(offset)
            .take(request.size() as usize)
            .cloned()
            .collect();
        let total = store.rows.len() as u64;
        Ok(Page::new(content, request, total))
    }
}
