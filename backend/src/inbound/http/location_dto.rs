//! JSON transfer shapes for locations and their mapping to domain types.
//!
//! Requests map into a validated [`LocationDraft`]; stored [`Location`]s map
//! into [`LocationResponse`]. Identifiers and timestamps in request bodies
//! are ignored.

use chrono::{DateTime, Utc};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Location, LocationDraft};
use crate::inbound::http::validation::location_validation_error;

/// Request payload for creating or replacing a location.
///
/// Every field is optional at the JSON level so a missing field reports the
/// same blank-field message as an empty one.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    /// Display name.
    #[schema(example = "Pier 39")]
    pub name: Option<String>,
    /// Neighbourhood.
    #[schema(example = "Fisherman's Wharf")]
    pub neighborhood: Option<String>,
    /// City.
    #[schema(example = "San Francisco")]
    pub city: Option<String>,
    /// State or region.
    #[schema(example = "CA")]
    pub state: Option<String>,
}

impl TryFrom<LocationRequest> for LocationDraft {
    type Error = Error;

    fn try_from(value: LocationRequest) -> Result<Self, Self::Error> {
        let LocationRequest {
            name,
            neighborhood,
            city,
            state,
        } = value;
        Self::try_new(
            name.unwrap_or_default(),
            neighborhood.unwrap_or_default(),
            city.unwrap_or_default(),
            state.unwrap_or_default(),
        )
        .map_err(|err| location_validation_error(&err))
    }
}

/// Response payload describing a stored location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Neighbourhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Creation instant (RFC 3339).
    pub created_at: DateTime<Utc>,
    /// Last update instant (RFC 3339).
    pub updated_at: DateTime<Utc>,
}

impl From<Location> for LocationResponse {
    fn from(value: Location) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            neighborhood: value.neighborhood,
            city: value.city,
            state: value.state,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Map a page of domain records into a page of responses.
pub fn location_page(page: Page<Location>) -> Page<LocationResponse> {
    page.map(LocationResponse::from)
}
