//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod location_dto;
pub mod locations;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::{ApiError, ApiResult};
