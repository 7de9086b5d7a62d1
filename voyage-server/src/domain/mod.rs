//! Domain types for the voyage schedule.
//!
//! Types that carry invariants enforce them at construction time, so code
//! that receives them can trust their validity.

mod anchor;
mod display;
mod occurrence;
mod route;
mod window;

pub use anchor::{
    Anchor, DEFAULT_ANCHOR_IDENTIFIER, DEFAULT_ANCHOR_TIME, InvalidAnchor, is_on_or_after_anchor,
};
pub use display::{DisplayZone, InvalidDisplayZone};
pub use occurrence::Occurrence;
pub use route::{RouteName, TimeOfDay, voyage_identifier};
pub use window::Window;
