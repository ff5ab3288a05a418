//! Timestamp parsing and display formatting.
//!
//! The tracker returns UTC-offset-qualified timestamps in two flavours:
//! the compact offset form (`2024-05-01T12:34:56.789+0300`) and strict
//! RFC 3339. Both are accepted here and normalized to the local clock.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};

/// Display format for normalized timestamps, second precision.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses an offset-qualified tracker timestamp.
///
/// Returns `None` when the value matches neither accepted shape; the caller
/// decides whether that is recoverable.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

/// Converts a tracker timestamp to the naive local clock.
pub fn to_local(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp(raw).map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Normalizes a tracker timestamp to a local-clock display string.
///
/// Unparseable input yields `None`; display call sites recover that to an
/// empty string rather than aborting the batch.
pub fn to_local_display(raw: &str) -> Option<String> {
    to_local(raw).map(|dt| dt.format(DISPLAY_FORMAT).to_string())
}
