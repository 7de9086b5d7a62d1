//! Aligning query windows to the voyage cadence.

use chrono::Duration;

use crate::domain::{Anchor, Window, is_on_or_after_anchor};

use super::cadence::{grace_period, hour_offset, truncate_to_hour};

/// Align `window` to departure ticks relative to `anchor`, in place.
///
/// The start is pulled back by the grace period (if that does not cross the
/// anchor) so a voyage that has only just left is still reported, then
/// rounded up to the next hour and onto an even hour offset from the
/// anchor. The end is rounded down to the hour.
///
/// The end-side parity check reads the offset of the *start* boundary. Once
/// the start has been made even that check never fires, so the end can
/// remain an odd number of hours from the anchor; enumeration still stops
/// at the last tick not after it.
///
/// A window whose start ends up after its end is left as is and simply
/// enumerates to nothing.
pub fn normalize(anchor: &Anchor, window: &mut Window) {
    let active = window.start - grace_period();
    if is_on_or_after_anchor(anchor, active) {
        window.start = active;
    }

    window.start = truncate_to_hour(window.start) + Duration::hours(1);
    window.end = truncate_to_hour(window.end);

    if hour_offset(anchor, window.start) % 2 != 0 {
        window.start += Duration::hours(1);
    }

    if hour_offset(anchor, window.start) % 2 != 0 {
        window.end -= Duration::hours(1);
    }
}
