//! Time and text formatting helpers for display and export.
//!
//! Everything here is pure: the functions take values and return strings,
//! so the same formatting is shared by the history table, the CSV export and
//! the running-timer display.
//!
//! ## Format Specifications
//!
//! - **Durations**: `HH:MM:SS`, hours zero-padded to at least two digits and
//!   never wrapped at 24 (`25:00:00`, `100:00:00`)
//! - **Date-times**: `YYYY/MM/DD HH:MM:SS` in the local time zone
//! - **File stamps**: `YYYYMMDDHHmm` in the local time zone
//! - **Option labels**: long text cut to a character limit and suffixed
//!   with `…`
//!
//! ## Examples
//!
//! ```rust
//! use worktimer::libs::formatter::{format_duration_secs, option_label};
//!
//! assert_eq!(format_duration_secs(3_725), "01:02:05");
//! assert_eq!(format_duration_secs(90_000), "25:00:00");
//! assert_eq!(option_label("abcdef", 3), "abc…");
//! ```

use chrono::{DateTime, Local, TimeZone, Utc};

/// Suffix appended to labels cut by [`option_label`].
pub const ELLIPSIS: char = '…';

/// Formats a number of elapsed seconds as `HH:MM:SS`.
///
/// Negative input is clamped to zero. Hours keep growing past 99 rather than
/// wrapping, so a session spanning several days stays readable.
pub fn format_duration_secs(total_secs: i64) -> String {
    let total = total_secs.max(0);
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Parses the `H+:MM:SS` form produced by [`format_duration_secs`].
pub fn parse_duration_secs(value: &str) -> Option<i64> {
    let mut parts = value.split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let mins: i64 = parts.next()?.parse().ok()?;
    let secs: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hours < 0 || !(0..60).contains(&mins) || !(0..60).contains(&secs) {
        return None;
    }
    hours.checked_mul(3600)?.checked_add(mins * 60 + secs)
}

/// Renders an instant as `YYYY/MM/DD HH:MM:SS` in the given time zone.
pub fn format_date_time_in<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Renders an instant as `YYYY/MM/DD HH:MM:SS` in local time.
pub fn format_date_time(instant: &DateTime<Utc>) -> String {
    format_date_time_in(instant, &Local)
}

/// Minute-resolution stamp used in export file names.
pub fn file_name_stamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%Y%m%d%H%M").to_string()
}

/// Cuts `text` to `max_chars` characters and appends `…` when anything was cut.
pub fn option_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut label: String = text.chars().take(max_chars).collect();
    label.push(ELLIPSIS);
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_duration_parse_rejects_garbage() {
        assert_eq!(parse_duration_secs("01:02:03"), Some(3723));
        assert_eq!(parse_duration_secs("125:00:00"), Some(450_000));
        assert_eq!(parse_duration_secs("01:60:00"), None);
        assert_eq!(parse_duration_secs("01:02"), None);
        assert_eq!(parse_duration_secs("a:b:c"), None);
        assert_eq!(parse_duration_secs("01:02:03:04"), None);
    }

    #[test]
    fn test_duration_parse_rejects_overflow() {
        assert_eq!(parse_duration_secs("9000000000000000:00:00"), None);
        assert_eq!(parse_duration_secs("99999999999999999999:00:00"), None);
    }

    #[test]
    fn test_date_time_uses_target_zone() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 23, 30, 5).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_date_time_in(&instant, &tokyo), "2025/01/16 08:30:05");
        assert_eq!(format_date_time_in(&instant, &Utc), "2025/01/15 23:30:05");
    }
}
