//! Record types for a single URL health-check result.

use std::fmt;

use chrono::NaiveDateTime;

/// Timestamp layout produced by the checker pipeline.
const CHECKED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stable record identifier.
///
/// Spreadsheet ids may be numeric; they are stringified once at ingest so
/// substring search over ids needs no further conversion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One URL status-check result row.
///
/// Records are immutable after load; the dataset invariant (ids unique
/// across the collection) is enforced at the ingest boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    /// The monitored address.
    pub url: String,
    /// Check outcome label. Recognized labels live in [`crate::status`];
    /// unrecognized values pass through as opaque strings.
    pub status: String,
    /// When the check ran, as produced by the checker (`YYYY-MM-DD HH:MM:SS`).
    pub last_checked: String,
    /// Free-text diagnostic message (may be empty).
    pub log: String,
    /// Path of a captured page image, if one was taken.
    pub screenshot: Option<String>,
}

impl Record {
    /// Parse `last_checked` into a timestamp, if it follows the checker's
    /// layout. Display always uses the raw string; this is for ordering.
    pub fn checked_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.last_checked.trim(), CHECKED_AT_FORMAT).ok()
    }

    /// Whether a screenshot is available for this record.
    pub fn has_screenshot(&self) -> bool {
        self.screenshot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_checked_at(raw: &str) -> Record {
        Record {
            id: RecordId::new("1"),
            url: "https://example.com".to_string(),
            status: "STATUS_OK".to_string(),
            last_checked: raw.to_string(),
            log: String::new(),
            screenshot: None,
        }
    }

    #[test]
    fn record_id_display_matches_source() {
        let id = RecordId::new("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn checked_at_parses_checker_layout() {
        let record = record_checked_at("2024-10-24 09:48:02");
        let parsed = record.checked_at().expect("timestamp should parse");
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-10-24 09:48:02");
    }

    #[test]
    fn checked_at_tolerates_surrounding_whitespace() {
        let record = record_checked_at("  2024-10-24 09:48:02 ");
        assert!(record.checked_at().is_some());
    }

    #[test]
    fn checked_at_rejects_other_layouts() {
        assert!(record_checked_at("24/10/2024").checked_at().is_none());
        assert!(record_checked_at("").checked_at().is_none());
    }
}
