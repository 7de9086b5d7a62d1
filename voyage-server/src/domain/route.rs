//! Route and time-of-day labels for the voyage rotation.
//!
//! Both tables are ordered relative to the default anchor: the anchor voyage
//! is `TimeOfDay::Day` on `RouteName::Bloodbrine`. Changing the anchor means
//! re-deriving which index corresponds to which label.

use std::fmt;

/// One of the four sea routes, in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Bloodbrine,
    Rothlyt,
    Merlthor,
    Rhotano,
}

impl RouteName {
    /// All routes in rotation order.
    pub const ALL: [RouteName; 4] = [
        RouteName::Bloodbrine,
        RouteName::Rothlyt,
        RouteName::Merlthor,
        RouteName::Rhotano,
    ];

    /// Look up a route by rotation index, wrapping negative and large indices.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(Self::ALL.len() as i64) as usize]
    }

    /// The label used in voyage identifiers.
    pub fn label(&self) -> &'static str {
        match self {
            RouteName::Bloodbrine => "Bloodbrine",
            RouteName::Rothlyt => "Rothlyt",
            RouteName::Merlthor => "Merlthor",
            RouteName::Rhotano => "Rhotano",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time of day a voyage sails in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeOfDay {
    Day,
    Sunset,
    Night,
}

impl TimeOfDay {
    /// All times of day in rotation order.
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Day, TimeOfDay::Sunset, TimeOfDay::Night];

    /// Look up a time of day by rotation index, wrapping negative and large indices.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(Self::ALL.len() as i64) as usize]
    }

    /// The label used in voyage identifiers.
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "day",
            TimeOfDay::Sunset => "sunset",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build a voyage identifier: time-of-day label followed by route label.
///
/// # Examples
///
/// ```
/// use voyage_server::domain::{RouteName, TimeOfDay, voyage_identifier};
///
/// assert_eq!(voyage_identifier(TimeOfDay::Sunset, RouteName::Merlthor), "sunsetMerlthor");
/// ```
pub fn voyage_identifier(time: TimeOfDay, route: RouteName) -> String {
    format!("{}{}", time.label(), route.label())
}
