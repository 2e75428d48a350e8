//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Connections come from a `bb8` pool of `diesel-async` connections. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module; the repository translates them to domain types and maps every
//! driver failure to a [`crate::domain::ports::LocationRepositoryError`].
//!
//! # Examples
//!
//! ```no_run
//! use backend::outbound::persistence::{
//!     DbPool, DieselLocationRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/locations";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let _repository = DieselLocationRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_location_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_location_repository::DieselLocationRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError,
};
