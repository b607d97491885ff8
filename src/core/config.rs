//! Process-scoped logging configuration
//!
//! One [`LogConfig`] holds the state every logger bound to it shares: the
//! level threshold, the default sink, the critical-exit switch and the
//! termination hook. [`LogConfig::global`] is the instance loggers use unless
//! another one is injected.

use super::error::Result;
use super::log_level::{should_emit, LogLevel};
use super::metrics::LoggerMetrics;
use super::sink::Sink;
use super::timestamp::TimestampFormat;
use crate::sinks::WriterSink;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

/// Environment variable holding the startup threshold.
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Exit code passed to the terminator by critical and fatal records.
pub const EXIT_CODE: i32 = 1;

/// Hook invoked with [`EXIT_CODE`] when a record requests process termination.
pub type Terminator = Arc<dyn Fn(i32) + Send + Sync>;

static GLOBAL: OnceLock<Arc<LogConfig>> = OnceLock::new();

pub struct LogConfig {
    threshold: AtomicU8,
    sink: RwLock<Arc<dyn Sink>>,
    critical_exit: AtomicBool,
    terminator: RwLock<Terminator>,
    timestamp_format: RwLock<TimestampFormat>,
    metrics: LoggerMetrics,
}

/// Parse a `LOG_LEVEL` setting. Unset or empty means `DEBUG`; anything other
/// than an exact level name is rejected.
pub fn parse_level_setting(value: Option<&str>) -> Result<LogLevel> {
    match value {
        None | Some("") => Ok(LogLevel::Debug),
        Some(name) => name.parse(),
    }
}

fn exit_process(code: i32) {
    std::process::exit(code)
}

impl LogConfig {
    #[must_use]
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::new()
    }

    /// Build a configuration whose threshold comes from `LOG_LEVEL`.
    ///
    /// An unrecognized value is reported on stderr and replaced by `DEBUG`.
    pub fn from_env() -> Arc<Self> {
        let value = std::env::var(LEVEL_ENV_VAR).ok();
        let threshold = match parse_level_setting(value.as_deref()) {
            Ok(level) => level,
            Err(e) => {
                eprintln!(
                    "[LOGGER WARNING] {} ignored ({}), defaulting to {}",
                    LEVEL_ENV_VAR,
                    e,
                    LogLevel::Debug
                );
                LogLevel::Debug
            }
        };
        Self::builder().threshold(threshold).build()
    }

    /// The process-wide configuration, initialised from the environment on
    /// first use.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(Self::from_env))
    }

    #[inline]
    pub fn threshold(&self) -> LogLevel {
        LogLevel::from_rank(self.threshold.load(Ordering::Acquire))
    }

    pub fn set_threshold(&self, level: LogLevel) {
        self.threshold.store(level.rank(), Ordering::Release);
    }

    /// Level filter against the current threshold.
    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        should_emit(level, self.threshold())
    }

    pub fn sink(&self) -> Arc<dyn Sink> {
        Arc::clone(&self.sink.read())
    }

    pub fn set_sink(&self, sink: Arc<dyn Sink>) {
        *self.sink.write() = sink;
    }

    pub fn critical_exit(&self) -> bool {
        self.critical_exit.load(Ordering::Acquire)
    }

    /// Whether critical records terminate the process. Fatal records always do.
    pub fn set_critical_exit(&self, enabled: bool) {
        self.critical_exit.store(enabled, Ordering::Release);
    }

    pub fn set_terminator(&self, terminator: Terminator) {
        *self.terminator.write() = terminator;
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format.read().clone()
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        *self.timestamp_format.write() = format;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub(crate) fn terminate(&self) {
        self.metrics.record_termination();
        // clone so the hook runs without holding the lock
        let terminator = Arc::clone(&self.terminator.read());
        terminator(EXIT_CODE);
    }
}

/// Builder for constructing a [`LogConfig`] with a fluent API
///
/// # Example
/// ```
/// use taglog::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let config = LogConfig::builder()
///     .threshold(LogLevel::Info)
///     .sink(sink.clone())
///     .critical_exit(false)
///     .build();
///
/// assert_eq!(config.threshold(), LogLevel::Info);
/// ```
pub struct LogConfigBuilder {
    threshold: LogLevel,
    sink: Option<Arc<dyn Sink>>,
    critical_exit: bool,
    terminator: Terminator,
    timestamp_format: TimestampFormat,
}

impl LogConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::Debug,
            sink: None,
            critical_exit: true,
            terminator: Arc::new(exit_process),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Default sink for loggers without their own output. Standard output
    /// and standard error when not set.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn critical_exit(mut self, enabled: bool) -> Self {
        self.critical_exit = enabled;
        self
    }

    /// Replace the default `std::process::exit` hook.
    ///
    /// # Example
    ///
    /// ```
    /// use taglog::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let config = LogConfig::builder()
    ///     .terminator(Arc::new(|code: i32| panic!("terminated with {}", code)))
    ///     .build();
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn build(self) -> Arc<LogConfig> {
        let sink: Arc<dyn Sink> = match self.sink {
            Some(sink) => sink,
            None => Arc::new(WriterSink::stdio()),
        };

        Arc::new(LogConfig {
            threshold: AtomicU8::new(self.threshold.rank()),
            sink: RwLock::new(sink),
            critical_exit: AtomicBool::new(self.critical_exit),
            terminator: RwLock::new(self.terminator),
            timestamp_format: RwLock::new(self.timestamp_format),
            metrics: LoggerMetrics::new(),
        })
    }
}

impl Default for LogConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::sync::atomic::AtomicI32;

    #[test]
    fn test_builder_defaults() {
        let config = LogConfig::builder().build();
        assert_eq!(config.threshold(), LogLevel::Debug);
        assert!(config.critical_exit());
        assert_eq!(config.timestamp_format(), TimestampFormat::Rfc3339);
        assert_eq!(config.sink().name(), "stdio");
    }

    #[test]
    fn test_parse_level_setting() {
        assert_eq!(parse_level_setting(None).unwrap(), LogLevel::Debug);
        assert_eq!(parse_level_setting(Some("")).unwrap(), LogLevel::Debug);
        assert_eq!(parse_level_setting(Some("ERROR")).unwrap(), LogLevel::Error);
        assert!(parse_level_setting(Some("error")).is_err());
        assert!(parse_level_setting(Some("TRACE")).is_err());
    }

    #[test]
    fn test_threshold_updates() {
        let config = LogConfig::builder().threshold(LogLevel::Info).build();
        assert!(!config.should_emit(LogLevel::Debug));
        assert!(config.should_emit(LogLevel::Info));

        config.set_threshold(LogLevel::Critical);
        assert_eq!(config.threshold(), LogLevel::Critical);
        assert!(!config.should_emit(LogLevel::Error));
    }

    #[test]
    fn test_sink_replacement() {
        let config = LogConfig::builder().build();
        config.set_sink(Arc::new(MemorySink::new()));
        assert_eq!(config.sink().name(), "memory");
    }

    #[test]
    fn test_terminator_receives_exit_code() {
        let seen = Arc::new(AtomicI32::new(-1));
        let seen_clone = Arc::clone(&seen);
        let config = LogConfig::builder()
            .terminator(Arc::new(move |code: i32| seen_clone.store(code, Ordering::SeqCst)))
            .build();

        config.terminate();
        assert_eq!(seen.load(Ordering::SeqCst), EXIT_CODE);
        assert_eq!(config.metrics().terminations(), 1);
    }

    #[test]
    fn test_global_is_shared() {
        let a = LogConfig::global();
        let b = LogConfig::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
