//! Sort specifications attached to page requests.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::PaginationError;

/// Ordering applied to a single sort property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Smallest values first.
    #[default]
    Asc,
    /// Largest values first.
    Desc,
}

impl Direction {
    /// Lower-case token used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PaginationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(PaginationError::InvalidDirection {
                value: value.to_owned(),
            })
        }
    }
}

/// One sort key: a property name plus its direction.
///
/// Property names are opaque to this crate; callers decide which names they
/// accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Order {
    property: String,
    direction: Direction,
}

impl Order {
    /// Build an order for `property` in the given direction.
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Ascending order on `property`.
    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Asc)
    }

    /// Descending order on `property`.
    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Desc)
    }

    /// Property the order applies to.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Direction of the order.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Parse one `sort` query value.
    ///
    /// Accepts `property`, `property,direction`, or several properties
    /// sharing a trailing direction (`name,city,desc`). A trailing segment is
    /// read as a direction only when it spells `asc` or `desc`. Blank segments
    /// are skipped, so an empty value yields no orders.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Direction, Order};
    ///
    /// let orders = Order::parse_all("name,city,desc");
    /// assert_eq!(orders, vec![Order::desc("name"), Order::desc("city")]);
    /// assert_eq!(Order::parse_all("createdAt")[0].direction(), Direction::Asc);
    /// ```
    #[must_use]
    pub fn parse_all(raw: &str) -> Vec<Self> {
        let mut segments: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        let direction = match segments.last() {
            Some(last) if segments.len() > 1 => match last.parse::<Direction>() {
                Ok(direction) => {
                    segments.pop();
                    direction
                }
                Err(_) => Direction::Asc,
            },
            _ => Direction::Asc,
        };

        segments
            .into_iter()
            .map(|property| Self::new(property, direction))
            .collect()
    }
}

/// Ordered list of sort keys; earlier keys take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    /// A sort with no keys.
    #[must_use]
    pub const fn unsorted() -> Self {
        Self { orders: Vec::new() }
    }

    /// Build a sort from explicit orders.
    #[must_use]
    pub const fn by(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Whether at least one key is present.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Keys in precedence order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Return `self` when sorted, otherwise `fallback`.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Order, Sort};
    ///
    /// let sort = Sort::unsorted().or(Sort::by(vec![Order::asc("createdAt")]));
    /// assert_eq!(sort.orders()[0].property(), "createdAt");
    /// ```
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        if self.is_sorted() { self } else { fallback }
    }

    pub(crate) fn extend(&mut self, orders: Vec<Order>) {
        self.orders.extend(orders);
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

#[cfg(test)]
mod tests {
    //! Sort parsing and fallback behaviour.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("name", vec![Order::asc("name")])]
    #[case("name,desc", vec![Order::desc("name")])]
    #[case("name,DESC", vec![Order::desc("name")])]
    #[case("name,Asc", vec![Order::asc("name")])]
    #[case("name,city", vec![Order::asc("name"), Order::asc("city")])]
    #[case("name,city,desc", vec![Order::desc("name"), Order::desc("city")])]
    #[case(" name , desc ", vec![Order::desc("name")])]
    #[case("", vec![])]
    #[case(",,", vec![])]
    fn parse_all_understands_spring_style_values(
        #[case] raw: &str,
        #[case] expected: Vec<Order>,
    ) {
        assert_eq!(Order::parse_all(raw), expected);
    }

    #[rstest]
    fn single_direction_token_is_treated_as_property() {
        // A lone "desc" names a property; the caller rejects it if unknown.
        let orders = Order::parse_all("desc");
        assert_eq!(orders, vec![Order::asc("desc")]);
    }

    #[rstest]
    #[case("up")]
    #[case("")]
    fn direction_rejects_unknown_tokens(#[case] raw: &str) {
        let err = raw.parse::<Direction>().expect_err("invalid direction");
        assert_eq!(err.parameter(), "sort");
    }

    #[rstest]
    fn or_keeps_explicit_sort() {
        let explicit = Sort::by(vec![Order::desc("name")]);
        let chosen = explicit.clone().or(Sort::by(vec![Order::asc("createdAt")]));
        assert_eq!(chosen, explicit);
    }

    #[rstest]
    fn direction_serialises_upper_case() {
        let json = serde_json::to_value(Order::desc("city")).expect("serialise order");
        assert_eq!(
            json,
            serde_json::json!({ "property": "city", "direction": "DESC" })
        );
    }
}
