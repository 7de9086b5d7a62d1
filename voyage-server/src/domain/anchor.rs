//! The fixed reference voyage every schedule calculation is relative to.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Identifier of the default anchor voyage.
pub const DEFAULT_ANCHOR_IDENTIFIER: &str = "dayBloodbrine";

/// Departure time of the default anchor voyage (08:00 PST on 2020-12-08).
pub const DEFAULT_ANCHOR_TIME: &str = "2020-12-08T16:00:00.000Z";

/// Error returned when an anchor cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid anchor: {reason}")]
pub struct InvalidAnchor {
    reason: &'static str,
}

/// A known voyage and its departure time.
///
/// The cadence tables in [`RouteName`](super::RouteName) and
/// [`TimeOfDay`](super::TimeOfDay) are phase-coupled to this value: index 0
/// of each table is the voyage departing at `reference_time`.
///
/// # Examples
///
/// ```
/// use voyage_server::domain::Anchor;
///
/// let anchor = Anchor::parse("dayBloodbrine", "2020-12-08T16:00:00.000Z").unwrap();
/// assert_eq!(anchor.identifier(), "dayBloodbrine");
///
/// assert!(Anchor::parse("dayBloodbrine", "yesterday").is_err());
/// assert!(Anchor::parse("", "2020-12-08T16:00:00Z").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Anchor {
    identifier: String,
    reference_time: DateTime<Utc>,
}

impl Anchor {
    /// Create an anchor from an identifier and a UTC departure time.
    pub fn new(
        identifier: impl Into<String>,
        reference_time: DateTime<Utc>,
    ) -> Result<Self, InvalidAnchor> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(InvalidAnchor {
                reason: "identifier must not be empty",
            });
        }

        Ok(Self {
            identifier,
            reference_time,
        })
    }

    /// Parse an anchor whose departure time is given in RFC 3339 format.
    pub fn parse(identifier: &str, reference_time: &str) -> Result<Self, InvalidAnchor> {
        let time = DateTime::parse_from_rfc3339(reference_time).map_err(|_| InvalidAnchor {
            reason: "reference time must be an RFC 3339 timestamp",
        })?;
        Self::new(identifier, time.with_timezone(&Utc))
    }

    /// The anchor's voyage identifier (e.g. "dayBloodbrine").
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The anchor's departure time.
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    /// Signed time from the anchor to `instant`.
    pub fn elapsed(&self, instant: DateTime<Utc>) -> Duration {
        instant.signed_duration_since(self.reference_time)
    }
}

impl Default for Anchor {
    fn default() -> Self {
        // Same instant as DEFAULT_ANCHOR_TIME
        let reference_time = Utc
            .with_ymd_and_hms(2020, 12, 8, 16, 0, 0)
            .single()
            .expect("default anchor time is valid");
        Self {
            identifier: DEFAULT_ANCHOR_IDENTIFIER.to_string(),
            reference_time,
        }
    }
}

impl fmt::Debug for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Anchor({} @ {})",
            self.identifier,
            self.reference_time.to_rfc3339()
        )
    }
}

/// Returns true if `instant` is at or after the anchor's departure time.
pub fn is_on_or_after_anchor(anchor: &Anchor, instant: DateTime<Utc>) -> bool {
    instant >= anchor.reference_time
}
