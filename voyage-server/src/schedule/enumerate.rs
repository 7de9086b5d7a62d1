//! Closed-form voyage enumeration.
//!
//! Every voyage is derived from its offset to the anchor. Within a day the
//! rotation advances one route per departure; each new day starts one slot
//! further along than the last (the first departure of the day is dropped
//! and everything moves up two hours). Every four slots the time of day
//! advances, so the full rotation repeats every 4 × 3 × 2 = 24 days.

use std::iter;

use chrono::{DateTime, Utc};

use crate::domain::{
    Anchor, DisplayZone, Occurrence, RouteName, TimeOfDay, Window, voyage_identifier,
};

use super::cadence::{HOURS_PER_DAY, cadence, elapsed_hours, floor_div};

/// Departure ticks from `window.start` to `window.end` inclusive.
pub fn ticks(window: &Window) -> impl Iterator<Item = DateTime<Utc>> + '_ {
    iter::successors(Some(window.start), |t| Some(*t + cadence()))
        .take_while(move |t| *t <= window.end)
}

/// Time of day and route of the voyage departing at `instant`.
///
/// `instant` is expected to lie on a departure tick relative to `anchor`.
pub fn route_at(anchor: &Anchor, instant: DateTime<Utc>) -> (TimeOfDay, RouteName) {
    let hours = elapsed_hours(anchor, instant);

    let days = floor_div(hours, HOURS_PER_DAY);
    let hours_into_day = hours.rem_euclid(HOURS_PER_DAY);
    let slot = days + hours_into_day / 2;

    let route = RouteName::from_index(slot);
    let time = TimeOfDay::from_index(floor_div(slot, RouteName::ALL.len() as i64));

    (time, route)
}

/// The voyage departing at `instant`.
pub fn occurrence_at(anchor: &Anchor, instant: DateTime<Utc>, zone: &DisplayZone) -> Occurrence {
    let (time, route) = route_at(anchor, instant);
    Occurrence::new(voyage_identifier(time, route), instant, zone.format(instant))
}

/// Every voyage departing in a normalized window, in departure order.
pub fn enumerate(anchor: &Anchor, window: &Window, zone: &DisplayZone) -> Vec<Occurrence> {
    ticks(window).map(|t| occurrence_at(anchor, t, zone)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn anchor() -> Anchor {
        Anchor::default()
    }

    fn at_hours(h: i64) -> DateTime<Utc> {
        anchor().reference_time() + Duration::hours(h)
    }

    fn id_at(h: i64) -> String {
        let (time, route) = route_at(&anchor(), at_hours(h));
        voyage_identifier(time, route)
    }

    fn identifiers(window: &Window) -> Vec<String> {
        enumerate(&anchor(), window, &DisplayZone::utc())
            .into_iter()
            .map(|o| o.identifier)
            .collect()
    }

    #[test]
    fn anchor_is_day_bloodbrine() {
        assert_eq!(id_at(0), anchor().identifier());
    }

    #[test]
    fn first_day_rotation() {
        assert_eq!(id_at(2), "dayRothlyt");
        assert_eq!(id_at(4), "dayMerlthor");
        assert_eq!(id_at(6), "dayRhotano");
        assert_eq!(id_at(8), "sunsetBloodbrine");
        assert_eq!(id_at(14), "sunsetRhotano");
        assert_eq!(id_at(16), "nightBloodbrine");
        assert_eq!(id_at(22), "nightRhotano");
    }

    #[test]
    fn next_day_shifts_one_slot() {
        assert_eq!(id_at(24), "dayRothlyt");
        assert_eq!(id_at(26), "dayMerlthor");
        assert_eq!(id_at(30), "sunsetBloodbrine");
    }

    #[test]
    fn pre_anchor_ticks_cycle() {
        assert_eq!(id_at(-2), "nightMerlthor");
        assert_eq!(id_at(-4), "nightRothlyt");
        assert_eq!(id_at(-24), "nightRhotano");
        assert_eq!(id_at(-22), "dayBloodbrine");
    }

    #[test]
    fn pre_anchor_matches_previous_period() {
        let period = 24 * 24;
        for h in (-48..0).step_by(2) {
            assert_eq!(id_at(h), id_at(h + period), "offset {h}");
        }
    }

    #[test]
    fn enumerate_inclusive_of_end() {
        let window = Window::new(at_hours(0), at_hours(4));
        assert_eq!(
            identifiers(&window),
            vec!["dayBloodbrine", "dayRothlyt", "dayMerlthor"]
        );
    }

    #[test]
    fn enumerate_stops_before_odd_end() {
        let window = Window::new(at_hours(0), at_hours(5));
        assert_eq!(identifiers(&window).len(), 3);
    }

    #[test]
    fn enumerate_empty_window() {
        let window = Window::new(at_hours(4), at_hours(2));
        assert!(identifiers(&window).is_empty());
    }

    #[test]
    fn enumerate_carries_times() {
        let window = Window::new(at_hours(0), at_hours(2));
        let occurrences = enumerate(&anchor(), &window, &DisplayZone::utc());
        assert_eq!(occurrences[0].time, at_hours(0));
        assert_eq!(occurrences[0].display_time, "12/08/20, 04:00 PM UTC");
        assert_eq!(occurrences[1].time, at_hours(2));
        assert_eq!(occurrences[1].display_time, "12/08/20, 06:00 PM UTC");
    }

    #[test]
    fn every_identifier_appears_in_a_period() {
        let window = Window::new(at_hours(0), at_hours(24 * 24 - 2));
        let ids: std::collections::HashSet<String> = identifiers(&window).into_iter().collect();
        assert_eq!(ids.len(), 12);
    }
}
