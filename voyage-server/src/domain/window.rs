//! Time windows for schedule queries.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// A span of time to search for voyages in.
///
/// Raw windows come straight from the caller and may be in any order;
/// [`normalize`](crate::schedule::normalize) aligns them to the voyage
/// cadence in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    /// Create a window. No ordering is enforced.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Create a window starting at `start` and lasting `length`.
    pub fn starting_at(start: DateTime<Utc>, length: Duration) -> Self {
        Self {
            start,
            end: start + length,
        }
    }

    /// Returns true if the window contains no instants.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Length of the window, or zero if empty.
    pub fn length(&self) -> Duration {
        if self.is_empty() {
            Duration::zero()
        } else {
            self.end - self.start
        }
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Window({} .. {})",
            self.start.to_rfc3339(),
            self.end.to_rfc3339()
        )
    }
}
