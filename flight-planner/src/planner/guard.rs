//! Segment-repetition guard.
//!
//! Stops a route from flying an airport pair it has already flown, as in
//! `A->B->A->B`. Only that exact pattern is blocked: a route may come back
//! to an airport as long as it then heads somewhere new.

use crate::domain::{Flight, FlightIndex};

/// Check if appending `candidate` to `route` would retrace a visited pair.
///
/// The sources of the legs already in `route` are the visited airports. If
/// the candidate leaves from a visited airport, its first occurrence at
/// position `p` is taken, and the candidate is rejected when it flies to the
/// airport visited right after `p`.
pub fn repeats_segment(flights: &[Flight], route: &[FlightIndex], candidate: &Flight) -> bool {
    let mut visited = route.iter().map(|idx| flights[idx.0].source());

    if visited.by_ref().any(|airport| airport == candidate.source()) {
        // `any` stops right after position `p`, so the next item is `p + 1`.
        return visited.next() == Some(candidate.destination());
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, ConnectionWindow, Fare, FlightTime};
    use rust_decimal_macros::dec;

    fn flight(from: &str, to: &str) -> Flight {
        Flight::new(
            AirportCode::parse(from).unwrap(),
            AirportCode::parse(to).unwrap(),
            FlightTime::parse("2017-02-11T10:00:00").unwrap(),
            FlightTime::parse("2017-02-11T11:00:00").unwrap(),
            "TST1",
            Fare {
                price: dec!(1),
                bags_allowed: 1,
                bag_price: dec!(1),
            },
            ConnectionWindow::default(),
        )
        .unwrap()
    }

    fn route(indices: &[usize]) -> Vec<FlightIndex> {
        indices.iter().copied().map(FlightIndex).collect()
    }

    #[test]
    fn blocks_repeated_pair() {
        // 0: AAA->BBB, 1: BBB->AAA; candidate AAA->BBB again
        let flights = vec![flight("AAA", "BBB"), flight("BBB", "AAA")];
        assert!(repeats_segment(
            &flights,
            &route(&[0, 1]),
            &flight("AAA", "BBB")
        ));
    }

    #[test]
    fn allows_revisit_to_new_destination() {
        // AAA->BBB->AAA then AAA->CCC
        let flights = vec![flight("AAA", "BBB"), flight("BBB", "AAA")];
        assert!(!repeats_segment(
            &flights,
            &route(&[0, 1]),
            &flight("AAA", "CCC")
        ));
    }

    #[test]
    fn allows_round_trip() {
        // AAA->BBB then BBB->AAA: BBB was never a source
        let flights = vec![flight("AAA", "BBB")];
        assert!(!repeats_segment(
            &flights,
            &route(&[0]),
            &flight("BBB", "AAA")
        ));
    }

    #[test]
    fn uses_first_occurrence_of_source() {
        // Sources: AAA, BBB, AAA, CCC. First AAA is followed by BBB.
        let flights = vec![
            flight("AAA", "BBB"),
            flight("BBB", "AAA"),
            flight("AAA", "CCC"),
            flight("CCC", "AAA"),
        ];
        let visited = route(&[0, 1, 2, 3]);

        assert!(repeats_segment(&flights, &visited, &flight("AAA", "BBB")));
        // AAA->CCC was flown too, but only the first occurrence counts
        assert!(!repeats_segment(&flights, &visited, &flight("AAA", "CCC")));
    }

    #[test]
    fn no_following_airport_is_not_a_repeat() {
        // Last leg is a self-loop, so its source has no successor
        let flights = vec![flight("AAA", "AAA")];
        assert!(!repeats_segment(
            &flights,
            &route(&[0]),
            &flight("AAA", "BBB")
        ));
    }

    #[test]
    fn empty_route_never_repeats() {
        let flights: Vec<Flight> = vec![];
        assert!(!repeats_segment(&flights, &[], &flight("AAA", "BBB")));
    }
}
