//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LocationsCommand, LocationsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub locations: Arc<dyn LocationsCommand>,
    pub locations_query: Arc<dyn LocationsQuery>,
}

impl HttpState {
    /// Construct state from the location ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::LocationService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryLocationRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = Arc::new(LocationService::new(
    ///     Arc::new(InMemoryLocationRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.locations_query.clone();
    /// ```
    pub fn new(
        locations: Arc<dyn LocationsCommand>,
        locations_query: Arc<dyn LocationsQuery>,
    ) -> Self {
        Self {
            locations,
            locations_query,
        }
    }
}
