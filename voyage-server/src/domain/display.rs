//! Display formatting for voyage departure times.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Error returned when a display zone offset is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid display zone offset: {minutes} minutes")]
pub struct InvalidDisplayZone {
    minutes: i32,
}

/// A fixed UTC offset plus the short name shown after formatted times.
///
/// Times are rendered in the short US locale style,
/// e.g. `12/08/20, 08:00 AM PST`.
///
/// # Examples
///
/// ```
/// use voyage_server::domain::DisplayZone;
/// use chrono::{TimeZone, Utc};
///
/// let pst = DisplayZone::new(-8 * 60, "PST").unwrap();
/// let t = Utc.with_ymd_and_hms(2020, 12, 8, 16, 0, 0).unwrap();
/// assert_eq!(pst.format(t), "12/08/20, 08:00 AM PST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
    label: String,
}

impl DisplayZone {
    /// Create a zone `offset_minutes` east of UTC.
    pub fn new(offset_minutes: i32, label: impl Into<String>) -> Result<Self, InvalidDisplayZone> {
        let offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(InvalidDisplayZone {
                minutes: offset_minutes,
            })?;

        Ok(Self {
            offset,
            label: label.into(),
        })
    }

    /// UTC, labelled "UTC".
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
            label: "UTC".to_string(),
        }
    }

    /// The short zone name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The zone's offset from UTC.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Format an instant as `MM/DD/YY, hh:mm AM|PM LABEL`.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let local = instant.with_timezone(&self.offset);
        format!("{} {}", local.format("%m/%d/%y, %I:%M %p"), self.label)
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::utc()
    }
}
