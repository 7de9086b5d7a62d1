//! A single scheduled voyage.

use std::fmt;

use chrono::{DateTime, Utc};

/// One voyage departing at one cadence tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    /// Voyage identifier, e.g. "sunsetMerlthor".
    pub identifier: String,

    /// Departure time.
    pub time: DateTime<Utc>,

    /// Departure time formatted for display.
    pub display_time: String,
}

impl Occurrence {
    /// Create a new occurrence.
    pub fn new(identifier: String, time: DateTime<Utc>, display_time: String) -> Self {
        Self {
            identifier,
            time,
            display_time,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.identifier, self.display_time)
    }
}
