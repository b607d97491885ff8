//! Log level definitions and the level filter

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record.
///
/// The discriminant is the filter rank: lower is more severe. `Critical`
/// always passes the filter, `Debug` passes only when the threshold is `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Critical = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    #[default]
    Debug = 4,
}

impl LogLevel {
    /// All levels, most severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`LogLevel::rank`]. Ranks past `Debug` clamp to `Debug`.
    #[inline]
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => LogLevel::Critical,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// Rank lookup by name with zero-value semantics.
    ///
    /// Names outside the rank table resolve to `0`, the same rank as
    /// `CRITICAL`, so an unknown level is always emitted and an unknown
    /// threshold only lets `CRITICAL` through.
    pub fn rank_of(name: &str) -> u8 {
        name.parse::<LogLevel>().map(LogLevel::rank).unwrap_or(0)
    }
}

/// The level filter: `level` is emitted iff its rank does not exceed the
/// threshold's rank.
#[inline]
pub fn should_emit(level: LogLevel, threshold: LogLevel) -> bool {
    level.rank() <= threshold.rank()
}

/// String form of [`should_emit`], using [`LogLevel::rank_of`] for both sides.
pub fn should_emit_str(level: &str, threshold: &str) -> bool {
    LogLevel::rank_of(level) <= LogLevel::rank_of(threshold)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Exact, case-sensitive match on the uppercase level name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(LogLevel::Critical),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_table() {
        assert_eq!(LogLevel::Debug.rank(), 4);
        assert_eq!(LogLevel::Info.rank(), 3);
        assert_eq!(LogLevel::Warn.rank(), 2);
        assert_eq!(LogLevel::Error.rank(), 1);
        assert_eq!(LogLevel::Critical.rank(), 0);
    }

    #[test]
    fn test_filter_all_pairs() {
        for level in LogLevel::ALL {
            for threshold in LogLevel::ALL {
                assert_eq!(
                    should_emit(level, threshold),
                    level.rank() <= threshold.rank(),
                    "{} at threshold {}",
                    level,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_filter_edges() {
        for threshold in LogLevel::ALL {
            assert!(should_emit(LogLevel::Critical, threshold));
        }
        assert!(should_emit(LogLevel::Debug, LogLevel::Debug));
        assert!(!should_emit(LogLevel::Debug, LogLevel::Info));
        assert!(!should_emit(LogLevel::Error, LogLevel::Critical));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("warn".parse::<LogLevel>().is_err());
        assert!("WARNING".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_unknown_names_rank_zero() {
        assert_eq!(LogLevel::rank_of("VERBOSE"), 0);
        assert_eq!(LogLevel::rank_of("INFO"), 3);

        // unknown level always passes, unknown threshold behaves like CRITICAL
        assert!(should_emit_str("VERBOSE", "CRITICAL"));
        assert!(should_emit_str("CRITICAL", "bogus"));
        assert!(!should_emit_str("ERROR", "bogus"));
    }

    #[test]
    fn test_rank_roundtrip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_rank(level.rank()), level);
        }
        assert_eq!(LogLevel::from_rank(200), LogLevel::Debug);
    }

    #[test]
    fn test_display() {
        assert_eq!(LogLevel::Critical.to_string(), "CRITICAL");
        assert_eq!(format!("[{}]", LogLevel::Info), "[INFO]");
    }

    #[test]
    fn test_serde_uses_level_names() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"WARN\"");
        let parsed: LogLevel = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(parsed, LogLevel::Critical);
        assert!(serde_json::from_str::<LogLevel>("\"warn\"").is_err());
    }
}
