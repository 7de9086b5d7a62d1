//! Voyage schedule computation.
//!
//! Answers "which voyages matching these keywords depart in this window?"
//! entirely by arithmetic from a single known anchor voyage:
//!
//! 1. resolve keywords to voyage identifiers
//! 2. normalize the window onto the 2-hour departure cadence
//! 3. enumerate every departure in the window
//! 4. keep the departures whose identifier was requested

mod cadence;
mod compute;
mod enumerate;
mod filter;
mod normalize;

pub use cadence::{CADENCE_HOURS, GRACE_MINUTES, cadence, floor_div, grace_period};
pub use compute::compute;
pub use enumerate::{enumerate, occurrence_at, route_at, ticks};
pub use filter::filter;
pub use normalize::normalize;
