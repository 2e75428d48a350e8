//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Stored locations.
    ///
    /// `id` is a `BIGSERIAL` assigned on insert; timestamps are written by the
    /// service, never by database defaults or triggers.
    locations (id) {
        id -> Int8,
        name -> Varchar,
        neighborhood -> Varchar,
        city -> Varchar,
        state -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
