//! Application state for the web layer.

use chrono::Duration;

use crate::context::SharedSchedule;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Voyage schedule (anchor, keyword table, display zone)
    pub schedule: SharedSchedule,

    /// Longest search window a request may ask for
    pub max_window: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedule: SharedSchedule, max_window: Duration) -> Self {
        Self {
            schedule,
            max_window,
        }
    }
}
