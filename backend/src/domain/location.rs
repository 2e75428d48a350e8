//! Location records and their validated write input.
//!
//! A [`Location`] is the stored form: identifier assigned by the store plus
//! two timestamps owned by the service. Writes go through [`LocationDraft`],
//! which guarantees every descriptive field is non-blank.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a location.
///
/// # Examples
/// ```
/// use backend::domain::LocationId;
///
/// let id = LocationId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(i64);

impl LocationId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive fields a caller must supply, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    /// Display name of the location.
    Name,
    /// Neighbourhood the location sits in.
    Neighborhood,
    /// City the location sits in.
    City,
    /// State or region the location sits in.
    State,
}

impl LocationField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::State => "state",
        }
    }
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised while building a [`LocationDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationValidationError {
    /// A required field was empty or whitespace only.
    #[error("The '{field}' parameter cannot be left blank!")]
    Blank {
        /// First blank field found.
        field: LocationField,
    },
}

/// Validated descriptive fields used to create or overwrite a location.
///
/// ## Invariants
/// - `name`, `neighborhood`, `city` and `state` each contain at least one
///   non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDraft {
    name: String,
    neighborhood: String,
    city: String,
    state: String,
}

impl LocationDraft {
    /// Validate and build a draft.
    ///
    /// Fields are checked in the order name, neighborhood, city, state; the
    /// first blank one is reported.
    ///
    /// # Errors
    /// Returns [`LocationValidationError::Blank`] naming the first blank field.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{LocationDraft, LocationField, LocationValidationError};
    ///
    /// let draft = LocationDraft::try_new("Pier 39", "Fisherman's Wharf", "San Francisco", "CA")
    ///     .expect("valid draft");
    /// assert_eq!(draft.city(), "San Francisco");
    ///
    /// let err = LocationDraft::try_new("Pier 39", " ", "", "CA").expect_err("blank");
    /// assert_eq!(
    ///     err,
    ///     LocationValidationError::Blank { field: LocationField::Neighborhood }
    /// );
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Result<Self, LocationValidationError> {
        let draft = Self {
            name: name.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.into(),
        };
        let fields = [
            (LocationField::Name, &draft.name),
            (LocationField::Neighborhood, &draft.neighborhood),
            (LocationField::City, &draft.city),
            (LocationField::State, &draft.state),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(LocationValidationError::Blank { field: *field }),
            None => Ok(draft),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbourhood.
    #[must_use]
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    /// City.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State or region.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }
}

/// A location about to be inserted; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocation {
    /// Descriptive fields.
    pub draft: LocationDraft,
    /// Creation instant; also used as the initial `updated_at`.
    pub created_at: DateTime<Utc>,
}

/// Stored location record.
///
/// ## Invariants
/// - `created_at <= updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Store-assigned identifier.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Neighbourhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Set once on creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Materialise a freshly inserted record.
    #[must_use]
    pub fn from_new(id: LocationId, new: NewLocation) -> Self {
        let NewLocation { draft, created_at } = new;
        Self {
            id,
            name: draft.name,
            neighborhood: draft.neighborhood,
            city: draft.city,
            state: draft.state,
            created_at,
            updated_at: created_at,
        }
    }

    /// Overwrite the descriptive fields and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, so a clock running behind the
    /// stored timestamp leaves it unchanged.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Location, LocationDraft, LocationId, NewLocation};
    /// use chrono::{Duration, Utc};
    ///
    /// let created = Utc::now();
    /// let draft = LocationDraft::try_new("a", "b", "c", "d").expect("valid");
    /// let location = Location::from_new(
    ///     LocationId::new(1),
    ///     NewLocation { draft, created_at: created },
    /// );
    ///
    /// let later = created + Duration::seconds(5);
    /// let revised = location.revise(
    ///     LocationDraft::try_new("e", "f", "g", "h").expect("valid"),
    ///     later,
    /// );
    /// assert_eq!(revised.name, "e");
    /// assert_eq!(revised.created_at, created);
    /// assert_eq!(revised.updated_at, later);
    /// ```
    #[must_use]
    pub fn revise(self, draft: LocationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            name: draft.name,
            neighborhood: draft.neighborhood,
            city: draft.city,
            state: draft.state,
            created_at: self.created_at,
            updated_at: now.max(self.updated_at),
        }
    }
}
