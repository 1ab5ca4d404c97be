//! Route pricing.
//!
//! Totals ticket and baggage prices over the legs of a route and expands
//! them into one price per number of checked bags.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Flight, Route};

/// Price totals of a route.
///
/// Amounts are exact decimal sums of the input prices; rounding to cents
/// happens once, when the result is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedRoute {
    route: Route,
    allowed_baggage: u32,
    ticket_total: Decimal,
    bag_unit_total: Decimal,
}

impl PricedRoute {
    /// Price a route against the dataset it was discovered in.
    ///
    /// A route can carry at most what its most restrictive leg allows.
    pub fn new(flights: &[Flight], route: Route) -> Self {
        let legs = route.legs().iter().map(|idx| &flights[idx.0]);

        let mut allowed_baggage = u32::MAX;
        let mut ticket_total = Decimal::ZERO;
        let mut bag_unit_total = Decimal::ZERO;
        for leg in legs {
            allowed_baggage = allowed_baggage.min(leg.bags_allowed());
            ticket_total += leg.price();
            bag_unit_total += leg.bag_price();
        }

        Self {
            route,
            allowed_baggage,
            ticket_total,
            bag_unit_total,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    fn total_for(&self, bags: u32) -> Decimal {
        self.ticket_total + self.bag_unit_total * Decimal::from(bags)
    }

    /// Prices for `0..=allowed_baggage` bags.
    pub fn price_table(&self) -> Vec<(u32, Decimal)> {
        (0..=self.allowed_baggage)
            .map(|bags| (bags, self.total_for(bags)))
            .collect()
    }
}

/// Round an amount to cents, halves away from zero.
///
/// Amounts are never negative, so this is half-up rounding.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
