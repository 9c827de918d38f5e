//! Time-log records: the completed sessions written by the timer.
//!
//! A [`LogRecord`] is created exactly once, when a running session stops, and
//! is never updated afterwards; the only mutation the store allows is
//! deleting the whole record. Records copy the task and category strings at
//! write time, so deleting a task name or a category later leaves history
//! untouched.
//!
//! ## Serialized form
//!
//! Records serialize with camelCase keys, timestamps as ISO-8601 UTC strings
//! with millisecond precision and the duration as `HH:MM:SS`:
//!
//! ```json
//! {
//!   "id": 3,
//!   "startTime": "2025-01-15T09:00:00.000Z",
//!   "endTime": "2025-01-15T10:30:15.000Z",
//!   "duration": "01:30:15",
//!   "task": "設計",
//!   "category": "",
//!   "createdAt": "2025-01-15T10:30:15.004Z"
//! }
//! ```

use super::error::{Error, Result};
use super::formatter::{format_duration_secs, parse_duration_secs};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Elapsed time of a session in whole seconds.
///
/// Stored as an integer and formatted on read, so sessions longer than a day
/// keep their full length (`26:00:00` rather than wrapping to `02:00:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LogDuration(i64);

impl LogDuration {
    pub fn from_secs(secs: i64) -> Self {
        LogDuration(secs.max(0))
    }

    /// Elapsed whole seconds between two instants; the sub-second part is dropped.
    pub fn between(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Self {
        Self::from_secs((*end - *start).num_seconds())
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LogDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration_secs(self.0))
    }
}

impl Serialize for LogDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_duration_secs(&value)
            .map(LogDuration)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid duration '{}'", value)))
    }
}

/// ISO-8601 with milliseconds and a `Z` suffix, e.g. `2025-01-15T09:00:00.000Z`.
pub fn to_iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses any RFC 3339 timestamp and normalizes it to UTC.
pub fn parse_iso_string(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for the timestamp format above.
pub mod iso8601 {
    use super::{parse_iso_string, to_iso_string};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_iso_string(instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_iso_string(&value).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", value)))
    }
}

/// A persisted, immutable completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: i64,
    #[serde(with = "iso8601")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub end_time: DateTime<Utc>,
    pub duration: LogDuration,
    pub task: String,
    pub category: String,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
}

/// A record that has not been written yet; the store assigns its id.
///
/// Built only through [`NewLogRecord::new`], so the duration always matches
/// the interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogRecord {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    duration: LogDuration,
    task: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl NewLogRecord {
    /// Builds a record for a finished session, deriving the duration once.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, task: &str, category: &str, created_at: DateTime<Utc>) -> Self {
        NewLogRecord {
            start_time,
            end_time,
            duration: LogDuration::between(&start_time, &end_time),
            task: task.to_string(),
            category: category.to_string(),
            created_at,
        }
    }

    pub fn start_time(&self) -> &DateTime<Utc> {
        &self.start_time
    }

    pub fn end_time(&self) -> &DateTime<Utc> {
        &self.end_time
    }

    pub fn duration(&self) -> LogDuration {
        self.duration
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn validate(&self) -> Result<()> {
        if self.end_time < self.start_time {
            return Err(Error::InvalidInterval {
                start: to_iso_string(&self.start_time),
                end: to_iso_string(&self.end_time),
            });
        }
        Ok(())
    }

    pub fn into_record(self, id: i64) -> LogRecord {
        LogRecord {
            id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            task: self.task,
            category: self.category,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_string_normalizes_offsets() {
        let parsed = parse_iso_string("2025-01-15T18:00:00.250+09:00").unwrap();
        assert_eq!(to_iso_string(&parsed), "2025-01-15T09:00:00.250Z");
    }

    #[test]
    fn test_duration_drops_sub_seconds() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let end = start + chrono::Duration::milliseconds(61_999);
        assert_eq!(LogDuration::between(&start, &end).as_secs(), 61);
    }

    #[test]
    fn test_new_record_derives_duration_from_interval() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let end = start + chrono::Duration::seconds(5_405);
        let record = NewLogRecord::new(start, end, "Design", "", end);
        assert_eq!(record.duration().as_secs(), 5_405);
        assert_eq!(record.into_record(7).duration.to_string(), "01:30:05");
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let record = NewLogRecord::new(start, start - chrono::Duration::seconds(1), "", "", start);
        assert!(matches!(record.validate(), Err(Error::InvalidInterval { .. })));
    }
}
