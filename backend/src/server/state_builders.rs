//! Builders for HTTP state from the configured location store.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::{info, warn};

use backend::domain::LocationService;
use backend::domain::ports::LocationRepository;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryLocationRepository;
use backend::outbound::persistence::{DbPool, DieselLocationRepository};

use super::ServerConfig;

fn build_location_repository(pool: Option<&DbPool>) -> Arc<dyn LocationRepository> {
    match pool {
        Some(pool) => {
            info!("using PostgreSQL location repository");
            Arc::new(DieselLocationRepository::new(pool.clone()))
        }
        None => {
            warn!("no database configured; locations are kept in memory and lost on restart");
            Arc::new(InMemoryLocationRepository::new())
        }
    }
}

/// Build the shared HTTP state with one location service serving both ports.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = build_location_repository(config.db_pool.as_ref());
    let service = Arc::new(LocationService::new(repository, Arc::new(DefaultClock)));
    web::Data::new(HttpState::new(service.clone(), service))
}
