//! Route types.
//!
//! A `Route` is an itinerary of two or more flights, stored as indices into
//! the flight dataset so that recording one stays cheap.

use std::fmt;

use super::{DomainError, FlightIndex};

/// Separator used in route labels (`3->13`).
pub const LABEL_SEPARATOR: &str = "->";

/// An ordered sequence of at least two flight indices.
///
/// Connection validity is established by the search that discovers the
/// route; a `Route` only guarantees its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    legs: Vec<FlightIndex>,
}

impl Route {
    /// Create a route from its legs.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{FlightIndex, Route};
    ///
    /// let route = Route::new(vec![FlightIndex(3), FlightIndex(13)]).unwrap();
    /// assert_eq!(route.label(), "3->13");
    ///
    /// assert!(Route::new(vec![FlightIndex(3)]).is_err());
    /// ```
    pub fn new(legs: Vec<FlightIndex>) -> Result<Self, DomainError> {
        if legs.len() < 2 {
            return Err(DomainError::RouteTooShort(legs.len()));
        }
        Ok(Self { legs })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[FlightIndex] {
        &self.legs
    }

    /// Number of legs (always at least two).
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the human-readable key of this route.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leg) in self.legs.iter().enumerate() {
            if i > 0 {
                f.write_str(LABEL_SEPARATOR)?;
            }
            write!(f, "{leg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legs(indices: &[usize]) -> Vec<FlightIndex> {
        indices.iter().copied().map(FlightIndex).collect()
    }

    #[test]
    fn rejects_short_routes() {
        assert_eq!(
            Route::new(vec![]).unwrap_err(),
            DomainError::RouteTooShort(0)
        );
        assert_eq!(
            Route::new(legs(&[4])).unwrap_err(),
            DomainError::RouteTooShort(1)
        );
    }

    #[test]
    fn label_joins_indices() {
        let route = Route::new(legs(&[0, 5, 12])).unwrap();
        assert_eq!(route.label(), "0->5->12");
        assert_eq!(route.len(), 3);
        assert_eq!(route.legs(), legs(&[0, 5, 12]).as_slice());
    }

    #[test]
    fn equality_is_by_index_sequence() {
        let a = Route::new(legs(&[1, 2])).unwrap();
        let b = Route::new(legs(&[1, 2])).unwrap();
        let c = Route::new(legs(&[2, 1])).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
