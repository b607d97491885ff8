//! Timestamp and duration formatting utilities
//!
//! Provides the timestamp formats a record can be stamped with (RFC 3339 by
//! default) and the compact duration rendering used by the `duration` tag.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

/// Timestamp format options for the leading field of a record
///
/// # Examples
///
/// ```
/// use taglog::core::TimestampFormat;
/// use chrono::Utc;
///
/// let timestamp = TimestampFormat::Rfc3339.format(&Utc::now());
/// // Output: "2025-01-08T10:30:45Z"
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 at second precision: `2025-01-08T10:30:45Z`
    ///
    /// This is the default format.
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123Z`
    Rfc3339Millis,

    /// RFC 3339 with microseconds: `2025-01-08T10:30:45.123456Z`
    ///
    /// Provides higher precision for ordering concurrent records.
    Rfc3339Micros,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use taglog::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::Rfc3339Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, true)
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Render a duration in compact unit form: `0s`, `850ns`, `1.5µs`, `150ms`,
/// `1.5s`, `2m3s`, `1h0m0s`.
///
/// Below one second the largest fitting sub-second unit is used. From one
/// second up, hours and minutes lead once non-zero and seconds carry up to
/// nine fractional digits with trailing zeros trimmed.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return with_fraction(nanos, 1_000, "µs");
    }
    if nanos < 1_000_000_000 {
        return with_fraction(nanos, 1_000_000, "ms");
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{}h", hours);
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{}m", minutes);
    }
    let sec_nanos = u128::from(secs) * 1_000_000_000 + u128::from(duration.subsec_nanos());
    out.push_str(&with_fraction(sec_nanos, 1_000_000_000, "s"));
    out
}

fn with_fraction(value: u128, unit: u128, suffix: &str) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return format!("{}{}", whole, suffix);
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}{}", whole, digits.trim_end_matches('0'), suffix)
}
