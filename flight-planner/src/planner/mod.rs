//! Flight route planner using depth-first search.
//!
//! This module implements the core combination search that answers:
//! "Which itineraries of two or more flights can be chained together, and
//! what does each cost with 0, 1, 2... checked bags?"
//!
//! The search starts from every flight, extends partial routes through
//! connections inside the transfer window, and refuses to retrace an
//! airport pair it has already flown.

mod config;
mod departures_index;
mod guard;
mod pricing;
mod search;

pub use config::{ConfigError, SearchConfig};
pub use departures_index::DeparturesIndex;
pub use guard::repeats_segment;
pub use pricing::{PricedRoute, round_cents};
pub use search::{RouteFinder, SearchResult, find_routes};
