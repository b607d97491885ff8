//! Logger metrics for observability
//!
//! Counters shared by every logger bound to one [`LogConfig`](super::LogConfig):
//! how many records were written, filtered out, or lost to a failing sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use taglog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records written to a sink
    emitted: AtomicU64,

    /// Records rejected by the level filter
    suppressed: AtomicU64,

    /// Records the sink failed to accept
    write_failures: AtomicU64,

    /// Termination requests issued by critical or fatal records
    terminations: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            terminations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn terminations(&self) -> u64 {
        self.terminations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sink failure, returning the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_termination(&self) {
        self.terminations.fetch_add(1, Ordering::Relaxed);
    }

    /// Total number of records that reached the level filter
    pub fn total_attempted(&self) -> u64 {
        self.emitted_count() + self.suppressed_count() + self.write_failures()
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.terminations.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_emitted();
        metrics.record_suppressed();
        assert_eq!(metrics.record_write_failure(), 0);
        metrics.record_termination();

        assert_eq!(metrics.emitted_count(), 2);
        assert_eq!(metrics.suppressed_count(), 1);
        assert_eq!(metrics.write_failures(), 1);
        assert_eq!(metrics.terminations(), 1);
        assert_eq!(metrics.total_attempted(), 4);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_termination();
        metrics.reset();
        assert_eq!(metrics.total_attempted(), 0);
        assert_eq!(metrics.terminations(), 0);
    }
}
