//! Internal Diesel row types for the `locations` table.
//!
//! These never leave the persistence module; the repository converts them to
//! and from domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Location, LocationId, NewLocation};

use super::schema::locations;

/// Full row as read back from `locations`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LocationRow {
    pub id: i64,
    pub name: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            id: LocationId::new(row.id),
            name: row.name,
            neighborhood: row.neighborhood,
            city: row.city,
            state: row.state,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable row for new locations; `id` comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = locations)]
pub(crate) struct NewLocationRow<'a> {
    pub name: &'a str,
    pub neighborhood: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a NewLocation> for NewLocationRow<'a> {
    fn from(value: &'a NewLocation) -> Self {
        Self {
            name: value.draft.name(),
            neighborhood: value.draft.neighborhood(),
            city: value.draft.city(),
            state: value.draft.state(),
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}

/// Changeset overwriting the mutable columns of an existing row.
///
/// `created_at` is never part of the changeset.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = locations)]
pub(crate) struct LocationChanges<'a> {
    pub name: &'a str,
    pub neighborhood: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Location> for LocationChanges<'a> {
    fn from(value: &'a Location) -> Self {
        Self {
            name: &value.name,
            neighborhood: &value.neighborhood,
            city: &value.city,
            state: &value.state,
            updated_at: value.updated_at,
        }
    }
}
