//! Typed sort keys and list queries for locations.
//!
//! Callers supply free-form sort properties through [`PageRequest`]; this
//! module resolves them against the sortable columns and applies the default
//! order when none is requested.

use std::str::FromStr;

use pagination::{Direction, Order, PageRequest, Sort};

/// Properties a location listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationSortKey {
    /// Store-assigned identifier.
    Id,
    /// Display name.
    Name,
    /// Neighbourhood.
    Neighborhood,
    /// City.
    City,
    /// State or region.
    State,
    /// Creation instant.
    CreatedAt,
    /// Last update instant.
    UpdatedAt,
}

impl LocationSortKey {
    /// Property name as it appears in `sort` query values.
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::State => "state",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

/// A sort property that does not name a sortable location field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No property '{property}' found for type 'Location'")]
pub struct UnknownSortProperty {
    /// Property as supplied by the caller.
    pub property: String,
}

impl FromStr for LocationSortKey {
    type Err = UnknownSortProperty;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "neighborhood" => Ok(Self::Neighborhood),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(UnknownSortProperty {
                property: other.to_owned(),
            }),
        }
    }
}

/// One resolved sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOrder {
    /// Column to order by.
    pub key: LocationSortKey,
    /// Ascending or descending.
    pub direction: Direction,
}

impl TryFrom<&Order> for LocationOrder {
    type Error = UnknownSortProperty;

    fn try_from(order: &Order) -> Result<Self, Self::Error> {
        Ok(Self {
            key: order.property().parse()?,
            direction: order.direction(),
        })
    }
}

/// Paging window plus resolved sort keys for a location listing.
///
/// ## Invariants
/// - `orders` is never empty; unsorted requests fall back to `createdAt`
///   ascending.
/// - `request().sort()` mirrors `orders`, so the page envelope reports the
///   order actually applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationListQuery {
    request: PageRequest,
    orders: Vec<LocationOrder>,
}

impl LocationListQuery {
    /// Sort applied when the caller requests none.
    #[must_use]
    pub fn default_sort() -> Sort {
        Sort::by(vec![Order::asc(LocationSortKey::CreatedAt.property())])
    }

    /// Resolve the sort of `request`, applying the default when unsorted.
    ///
    /// # Errors
    /// Returns [`UnknownSortProperty`] for the first property that is not a
    /// sortable location field.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{LocationListQuery, LocationSortKey};
    /// use pagination::{Direction, PageRequest};
    ///
    /// let query = LocationListQuery::from_request(PageRequest::default())?;
    /// assert_eq!(query.orders()[0].key, LocationSortKey::CreatedAt);
    /// assert_eq!(query.orders()[0].direction, Direction::Asc);
    ///
    /// let bad = PageRequest::from_query("sort=colour").expect("valid paging");
    /// assert!(LocationListQuery::from_request(bad).is_err());
    /// # Ok::<(), backend::domain::UnknownSortProperty>(())
    /// ```
    pub fn from_request(request: PageRequest) -> Result<Self, UnknownSortProperty> {
        let sort = request.sort().clone().or(Self::default_sort());
        let orders = sort
            .orders()
            .iter()
            .map(LocationOrder::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            request: request.with_sort(sort),
            orders,
        })
    }

    /// Paging window with the applied sort.
    #[must_use]
    pub const fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Resolved sort keys in precedence order.
    #[must_use]
    pub fn orders(&self) -> &[LocationOrder] {
        &self.orders
    }
}
