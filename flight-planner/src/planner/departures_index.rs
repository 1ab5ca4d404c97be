//! Departures index for connection lookup.
//!
//! Every extension step of the search asks "which flights leave airport X
//! inside this time window?". Grouping flights by source airport and sorting
//! each group by departure turns that into a binary search instead of a scan
//! over the whole dataset.

use std::collections::HashMap;

use crate::domain::{AirportCode, Flight, FlightIndex, FlightTime};

/// Index of flights keyed by their departure airport.
#[derive(Debug, Default)]
pub struct DeparturesIndex {
    /// Map from airport -> flights leaving it, sorted by (departure, index).
    departures: HashMap<AirportCode, Vec<(FlightTime, FlightIndex)>>,
}

impl DeparturesIndex {
    /// Build the index over a flight dataset.
    pub fn build(flights: &[Flight]) -> Self {
        let mut departures: HashMap<AirportCode, Vec<(FlightTime, FlightIndex)>> = HashMap::new();

        for (idx, flight) in flights.iter().enumerate() {
            departures
                .entry(flight.source().clone())
                .or_default()
                .push((flight.departure(), FlightIndex(idx)));
        }

        for group in departures.values_mut() {
            group.sort_unstable();
        }

        Self { departures }
    }

    /// Flights leaving `airport` with a departure in `[earliest, latest]`.
    ///
    /// Results are in ascending index order, the order a full scan of the
    /// dataset would produce.
    pub fn departing_between(
        &self,
        airport: &AirportCode,
        earliest: FlightTime,
        latest: FlightTime,
    ) -> Vec<FlightIndex> {
        let Some(group) = self.departures.get(airport) else {
            return Vec::new();
        };

        let start = group.partition_point(|(dep, _)| *dep < earliest);
        let end = group.partition_point(|(dep, _)| *dep <= latest);
        if start >= end {
            return Vec::new();
        }

        let mut found: Vec<FlightIndex> = group[start..end].iter().map(|(_, idx)| *idx).collect();
        found.sort_unstable();
        found
    }

    /// Valid continuations of `from` in ascending index order.
    ///
    /// A continuation leaves from where `from` lands, inside its connection
    /// window, and allows at least as many bags.
    pub fn connections_from(&self, flights: &[Flight], from: &Flight) -> Vec<FlightIndex> {
        let mut found = self.departing_between(
            from.destination(),
            from.min_connect_departure(),
            from.max_connect_departure(),
        );
        found.retain(|idx| from.bags_allowed() <= flights[idx.0].bags_allowed());
        found
    }
}
