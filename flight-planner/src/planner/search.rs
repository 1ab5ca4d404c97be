//! Depth-first route search.
//!
//! Starting from every flight in turn, extends partial itineraries through
//! valid connections and records each itinerary of two or more legs.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::domain::{Flight, FlightIndex, Route};

use super::config::SearchConfig;
use super::departures_index::DeparturesIndex;
use super::guard::repeats_segment;

/// Result of route search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Found routes, in discovery order.
    pub routes: Vec<Route>,

    /// Number of candidate connections examined during search.
    pub connections_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Routes discovered from one starting flight.
///
/// Distinct starting flights can never produce the same route, so each
/// start owns its partition and its duplicate set.
#[derive(Debug, Default)]
struct Discovered {
    routes: Vec<Route>,
    seen: HashSet<Vec<FlightIndex>>,
    connections_explored: usize,
}

impl Discovered {
    /// Record `path` as a route unless it was already found.
    ///
    /// Returns true if the route is new.
    fn record(&mut self, path: &[FlightIndex]) -> bool {
        if self.seen.contains(path) {
            return false;
        }
        let Ok(route) = Route::new(path.to_vec()) else {
            return false;
        };
        self.seen.insert(path.to_vec());
        self.routes.push(route);
        true
    }
}

/// Route finder over a fixed flight dataset.
pub struct RouteFinder<'a> {
    flights: &'a [Flight],
    index: DeparturesIndex,
    config: &'a SearchConfig,
}

impl<'a> RouteFinder<'a> {
    /// Create a new finder, indexing the flights by departure airport.
    pub fn new(flights: &'a [Flight], config: &'a SearchConfig) -> Self {
        Self {
            flights,
            index: DeparturesIndex::build(flights),
            config,
        }
    }

    /// Returns the flights this finder searches.
    pub fn flights(&self) -> &'a [Flight] {
        self.flights
    }

    /// Find every route in the dataset.
    ///
    /// Routes are grouped by starting flight in index order, and within a
    /// start appear in depth-first discovery order. Parallel and sequential
    /// searches return the same routes in the same order.
    pub fn search(&self) -> SearchResult {
        let starts = 0..self.flights.len();

        let partitions: Vec<Discovered> = if self.config.parallel {
            starts
                .into_par_iter()
                .map(|start| self.discover_from(FlightIndex(start)))
                .collect()
        } else {
            starts
                .map(|start| self.discover_from(FlightIndex(start)))
                .collect()
        };

        let mut result = SearchResult::empty();
        for partition in partitions {
            result.connections_explored += partition.connections_explored;
            result.routes.extend(partition.routes);
        }

        debug!(
            flights = self.flights.len(),
            routes = result.routes.len(),
            connections = result.connections_explored,
            parallel = self.config.parallel,
            "Route search complete"
        );

        result
    }

    /// Find every route that begins with the given flight.
    pub fn routes_from(&self, start: FlightIndex) -> Vec<Route> {
        self.discover_from(start).routes
    }

    fn discover_from(&self, start: FlightIndex) -> Discovered {
        let mut found = Discovered::default();
        if start.0 >= self.flights.len() {
            return found;
        }

        let mut path = vec![start];
        self.extend(&mut path, &mut found);

        trace!(
            start = %start,
            routes = found.routes.len(),
            "Explored starting flight"
        );
        found
    }

    /// Extend `path` with every valid next leg, recursing on new routes.
    ///
    /// `path` is restored to its original contents before returning.
    fn extend(&self, path: &mut Vec<FlightIndex>, found: &mut Discovered) {
        let Some(&last) = path.last() else {
            return;
        };
        let from = &self.flights[last.0];

        for next in self.index.connections_from(self.flights, from) {
            found.connections_explored += 1;

            if repeats_segment(self.flights, path, &self.flights[next.0]) {
                continue;
            }

            path.push(next);
            if found.record(path) {
                self.extend(path, found);
            }
            path.pop();
        }
    }
}

/// Find every route in `flights` with the given configuration.
pub fn find_routes(flights: &[Flight], config: &SearchConfig) -> SearchResult {
    RouteFinder::new(flights, config).search()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
