//! Caller location annotation
//!
//! Emit operations are `#[track_caller]`, so the call site reaches the logger
//! as a `std::panic::Location`. A [`LocateCaller`] turns that site into the
//! `file:line` annotation, or reports that no usable frame exists.

use super::error::{LoggerError, Result};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// `file:line` of the code that produced a record. `file` has no directory part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
}

impl CallerLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Build from a source path, stripping its directories.
    pub fn from_path(path: &str, line: u32) -> Option<Self> {
        let file = Path::new(path).file_name()?.to_str()?;
        Some(Self::new(file, line))
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Resolves a call site to the annotation written on the record.
pub trait LocateCaller: Send + Sync {
    fn locate(&self, site: &Location<'_>) -> Result<CallerLocation>;
}

impl<F> LocateCaller for F
where
    F: Fn(&Location<'_>) -> Result<CallerLocation> + Send + Sync,
{
    fn locate(&self, site: &Location<'_>) -> Result<CallerLocation> {
        self(site)
    }
}

/// Default locator: uses the tracked call site unless it lies inside the
/// logger's own emit code.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackedCaller;

impl TrackedCaller {
    fn is_internal(file: &str) -> bool {
        INTERNAL_SOURCES.contains(&file)
    }
}

const INTERNAL_SOURCES: &[&str] = &[
    super::logger::SOURCE_FILE,
    crate::global::SOURCE_FILE,
];

impl LocateCaller for TrackedCaller {
    fn locate(&self, site: &Location<'_>) -> Result<CallerLocation> {
        if Self::is_internal(site.file()) {
            return Err(LoggerError::CallerNotFound);
        }
        CallerLocation::from_path(site.file(), site.line()).ok_or(LoggerError::CallerNotFound)
    }
}
