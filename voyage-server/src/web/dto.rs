//! Data transfer objects for web requests and responses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Occurrence, Window};

/// Request to search for voyages.
#[derive(Debug, Default, Deserialize)]
pub struct VoyageSearchRequest {
    /// Comma-separated keywords (aliases or voyage identifiers)
    pub keys: Option<String>,

    /// Window start, RFC 3339 (defaults to now)
    pub start: Option<String>,

    /// Window end, RFC 3339 (defaults to 24 hours after start)
    pub end: Option<String>,
}

impl VoyageSearchRequest {
    /// The requested keywords, trimmed, with empty entries dropped.
    pub fn tokens(&self) -> Vec<String> {
        self.keys
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A voyage in search results.
#[derive(Debug, Serialize)]
pub struct VoyageResult {
    /// Voyage identifier (e.g. "sunsetMerlthor")
    pub key: String,

    /// Departure time, RFC 3339 UTC
    pub time: String,

    /// Departure time formatted for display
    pub display_time: String,
}

impl From<&Occurrence> for VoyageResult {
    fn from(o: &Occurrence) -> Self {
        Self {
            key: o.identifier.clone(),
            time: format_instant(o.time),
            display_time: o.display_time.clone(),
        }
    }
}

/// The normalized window that was searched.
#[derive(Debug, Serialize)]
pub struct WindowResult {
    pub start: String,
    pub end: String,
}

impl From<&Window> for WindowResult {
    fn from(w: &Window) -> Self {
        Self {
            start: format_instant(w.start),
            end: format_instant(w.end),
        }
    }
}

/// Response for a voyage search.
#[derive(Debug, Serialize)]
pub struct VoyageSearchResponse {
    pub voyages: Vec<VoyageResult>,
    pub window: WindowResult,
}

/// A keyword alias and the voyages it stands for.
#[derive(Debug, Serialize)]
pub struct KeywordResult {
    pub name: String,
    pub routes: Vec<String>,
}

/// Response listing all keyword aliases.
#[derive(Debug, Serialize)]
pub struct KeywordListResponse {
    pub keywords: Vec<KeywordResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Format an instant as RFC 3339 with a `Z` suffix.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
