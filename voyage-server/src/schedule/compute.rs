//! Voyage search entry point.

use tracing::debug;

use crate::domain::{Anchor, DisplayZone, Occurrence, Window};
use crate::keywords::AliasTable;

use super::enumerate::enumerate;
use super::filter::filter;
use super::normalize::normalize;

/// Find the voyages matching `tokens` in `window`.
///
/// Resolves the tokens through `aliases`, normalizes `window` in place,
/// enumerates every departure in it and keeps the matching ones in
/// departure order.
///
/// # Examples
///
/// ```
/// use voyage_server::domain::{Anchor, DisplayZone, Window};
/// use voyage_server::keywords::AliasTable;
/// use voyage_server::schedule::compute;
/// use chrono::Duration;
///
/// let anchor = Anchor::default();
/// let start = anchor.reference_time() - Duration::minutes(30);
/// let mut window = Window::starting_at(start, Duration::hours(6));
///
/// let found = compute(&anchor, &AliasTable::new(), ["dayBloodbrine"], &mut window, &DisplayZone::utc());
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].time, anchor.reference_time());
/// ```
pub fn compute<I, S>(
    anchor: &Anchor,
    aliases: &AliasTable,
    tokens: I,
    window: &mut Window,
    zone: &DisplayZone,
) -> Vec<Occurrence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let identifiers = aliases.resolve(tokens);
    normalize(anchor, window);

    let all = enumerate(anchor, window, zone);
    let total = all.len();
    let matching = filter(all, &identifiers);

    debug!(
        start = %window.start,
        end = %window.end,
        identifiers = identifiers.len(),
        total,
        matching = matching.len(),
        "computed voyages"
    );

    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::parse_keywords;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn anchor() -> Anchor {
        Anchor::default()
    }

    fn r() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 12, 8, 16, 0, 0).unwrap()
    }

    fn aliases() -> AliasTable {
        parse_keywords(
            r#"{ "keywords": [
                { "name": "Bloodbrine", "routes": ["dayBloodbrine", "sunsetBloodbrine", "nightBloodbrine"] },
                { "name": "day", "routes": ["dayBloodbrine", "dayRothlyt", "dayMerlthor", "dayRhotano"] }
            ] }"#,
        )
        .unwrap()
    }

    fn run(tokens: &[&str], start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Occurrence> {
        let mut window = Window::new(start, end);
        compute(&anchor(), &aliases(), tokens, &mut window, &DisplayZone::utc())
    }

    fn ids(found: &[Occurrence]) -> Vec<&str> {
        found.iter().map(|o| o.identifier.as_str()).collect()
    }

    #[test]
    fn window_starting_on_anchor_skips_anchor_voyage() {
        // Starting exactly at the anchor rounds up to the next tick.
        let found = run(&["dayBloodbrine"], r(), r() + Duration::hours(4));
        assert!(found.is_empty());

        let found = run(&["day"], r(), r() + Duration::hours(4));
        assert_eq!(ids(&found), vec!["dayRothlyt", "dayMerlthor"]);
        assert_eq!(found[0].time, r() + Duration::hours(2));
    }

    #[test]
    fn window_just_before_anchor_includes_it() {
        let found = run(&["dayBloodbrine"], r() - Duration::minutes(30), r() + Duration::hours(4));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].time, r());
        assert_eq!(found[0].display_time, "12/08/20, 04:00 PM UTC");
    }

    #[test]
    fn alias_expands_across_days() {
        let found = run(&["Bloodbrine"], r() - Duration::minutes(30), r() + Duration::days(2));
        assert_eq!(
            ids(&found),
            vec![
                "dayBloodbrine",
                "sunsetBloodbrine",
                "nightBloodbrine",
                "sunsetBloodbrine",
                "nightBloodbrine",
                "dayBloodbrine",
            ]
        );
        assert_eq!(found[1].time, r() + Duration::hours(8));
        assert_eq!(found[2].time, r() + Duration::hours(16));
        // Next day the rotation starts one slot later.
        assert_eq!(found[3].time, r() + Duration::hours(30));
        assert_eq!(found[5].time, r() + Duration::hours(46));
    }

    #[test]
    fn results_spaced_on_cadence() {
        let found = run(&["day", "Bloodbrine"], r() + Duration::hours(3), r() + Duration::days(5));
        for o in &found {
            let hours = (o.time - r()).num_hours();
            assert_eq!(hours % 2, 0, "{} off cadence", o);
        }
    }

    #[test]
    fn grace_window_reports_active_voyage() {
        // 10 minutes after dayMerlthor departs (R+4h).
        let found = run(
            &["dayMerlthor"],
            r() + Duration::hours(4) + Duration::minutes(10),
            r() + Duration::hours(6),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].time, r() + Duration::hours(4));
    }

    #[test]
    fn window_is_normalized_in_place() {
        let mut window = Window::new(r() + Duration::minutes(5), r() + Duration::minutes(250));
        compute(&anchor(), &aliases(), ["day"], &mut window, &DisplayZone::utc());
        assert_eq!(window.start, r() + Duration::hours(2));
        assert_eq!(window.end, r() + Duration::hours(4));
    }

    #[test]
    fn no_tokens_no_results() {
        let found = run(&[], r() - Duration::days(1), r() + Duration::days(1));
        assert!(found.is_empty());
    }

    #[test]
    fn pre_anchor_window() {
        let found = run(&["nightMerlthor"], r() - Duration::hours(3), r());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].time, r() - Duration::hours(2));
    }

    #[test]
    fn reversed_window_yields_nothing() {
        let found = run(&["day"], r() + Duration::days(1), r());
        assert!(found.is_empty());
    }

    #[test]
    fn repeated_calls_share_context() {
        let anchor = anchor();
        let aliases = aliases();
        let zone = DisplayZone::utc();
        let mut a = Window::new(r() + Duration::hours(1), r() + Duration::hours(12));
        let mut b = a;
        let first = compute(&anchor, &aliases, ["day"], &mut a, &zone);
        let second = compute(&anchor, &aliases, ["day"], &mut b, &zone);
        assert_eq!(first, second);
    }
}
