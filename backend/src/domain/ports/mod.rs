//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`LocationsCommand`], [`LocationsQuery`]) are called by
//! inbound adapters; the driven [`LocationRepository`] port is implemented by
//! outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod location_repository;
mod locations_command;
mod locations_query;

#[cfg(test)]
pub use location_repository::MockLocationRepository;
pub use location_repository::{LocationRepository, LocationRepositoryError};
#[cfg(test)]
pub use locations_command::MockLocationsCommand;
pub use locations_command::LocationsCommand;
#[cfg(test)]
pub use locations_query::MockLocationsQuery;
pub use locations_query::LocationsQuery;
