//! Cadence constants and the hour arithmetic shared by the schedule stages.

use chrono::{DateTime, Duration, Utc};

use crate::domain::Anchor;

/// Hours between consecutive voyage departures.
pub const CADENCE_HOURS: i64 = 2;

/// How long after its departure slot a voyage still counts as active.
pub const GRACE_MINUTES: i64 = 15;

pub(crate) const HOURS_PER_DAY: i64 = 24;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Time between consecutive voyage departures.
pub fn cadence() -> Duration {
    Duration::hours(CADENCE_HOURS)
}

/// The active-voyage grace period.
pub fn grace_period() -> Duration {
    Duration::minutes(GRACE_MINUTES)
}

/// Integer division rounding toward negative infinity.
///
/// `i64::div` truncates toward zero, which would put pre-anchor ticks in
/// the wrong day and rotation slot.
pub fn floor_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if (numerator % denominator != 0) && ((numerator < 0) != (denominator < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

/// Whole hours from the anchor to `instant`, rounded down.
pub fn elapsed_hours(anchor: &Anchor, instant: DateTime<Utc>) -> i64 {
    floor_div(anchor.elapsed(instant).num_milliseconds(), MILLIS_PER_HOUR)
}

/// Hour-of-day component of the offset from the anchor to `instant`, in `0..24`.
pub fn hour_offset(anchor: &Anchor, instant: DateTime<Utc>) -> i64 {
    elapsed_hours(anchor, instant).rem_euclid(HOURS_PER_DAY)
}

/// Drop the minutes, seconds and sub-second part of `instant`.
pub fn truncate_to_hour(instant: DateTime<Utc>) -> DateTime<Utc> {
    let into_hour = Duration::seconds(instant.timestamp().rem_euclid(3600))
        + Duration::nanoseconds(i64::from(instant.timestamp_subsec_nanos()));
    instant - into_hour
}
