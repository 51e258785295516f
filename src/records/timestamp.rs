//! Record timestamps.
//!
//! Accepts RFC 3339 date-times with an offset as well as ISO 8601 date-times
//! without one (`2024-05-01T12:00:00`). Whichever form arrives is serialized
//! back unchanged.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Caller-supplied record timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Date-time carrying a UTC offset
    Zoned(DateTime<FixedOffset>),
    /// Date-time without an offset
    Naive(NaiveDateTime),
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Naive(value)
    }
}
