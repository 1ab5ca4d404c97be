//! Flight combinations planner.
//!
//! Reads a flat list of flight segments and answers: "Which itineraries of
//! two or more connecting flights exist, and what does each cost with
//! 0, 1, 2... checked bags?"

pub mod domain;
pub mod input;
pub mod output;
pub mod planner;
