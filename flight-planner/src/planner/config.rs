//! Search configuration for the route finder.

use chrono::Duration;

use crate::domain::ConnectionWindow;

/// Error from an inconsistent configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Connection bound is negative
    #[error("connection hours must not be negative (got {0})")]
    NegativeConnection(i64),

    /// Connection bound does not fit in a duration
    #[error("connection hours out of range (got {0})")]
    OutOfRange(i64),

    /// Minimum connection is longer than the maximum
    #[error("minimum connection ({min}h) exceeds maximum connection ({max}h)")]
    InvertedWindow { min: i64, max: i64 },
}

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum time between an arrival and a connecting departure (hours).
    pub min_connection_hours: i64,

    /// Maximum time between an arrival and a connecting departure (hours).
    pub max_connection_hours: i64,

    /// Search from each starting flight on the rayon thread pool.
    /// Output is identical to the sequential search.
    pub parallel: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_connection_hours: i64, max_connection_hours: i64, parallel: bool) -> Self {
        Self {
            min_connection_hours,
            max_connection_hours,
            parallel,
        }
    }

    /// Returns the window applied to every loaded flight.
    ///
    /// Fails on negative, inverted or unrepresentable bounds.
    pub fn connection_window(&self) -> Result<ConnectionWindow, ConfigError> {
        let (min, max) = (self.min_connection_hours, self.max_connection_hours);
        for hours in [min, max] {
            if hours < 0 {
                return Err(ConfigError::NegativeConnection(hours));
            }
        }
        if min > max {
            return Err(ConfigError::InvertedWindow { min, max });
        }

        Ok(ConnectionWindow {
            min: hours(min)?,
            max: hours(max)?,
        })
    }
}

fn hours(hours: i64) -> Result<Duration, ConfigError> {
    Duration::try_hours(hours).ok_or(ConfigError::OutOfRange(hours))
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_hours: 1,
            max_connection_hours: 4,
            parallel: false,
        }
    }
}
