//! Main logger implementation

use super::{
    caller::{LocateCaller, TrackedCaller},
    config::LogConfig,
    error::Result,
    fields::{FieldValue, Fields},
    log_level::LogLevel,
    record::Record,
    sink::{Channel, Sink},
    template::{concat, render_message, Arg},
};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use std::time::Instant;

/// Source path of this module, used to recognise call sites inside the logger.
pub(crate) const SOURCE_FILE: &str = file!();

/// One logging context: persistent tags, one-shot metadata and an output.
///
/// Tags appear on every record until overwritten or removed. Metadata
/// appears on the next record only and is cleared by every emit call,
/// whether or not the record passes the level filter.
///
/// A logger is owned by one caller at a time; emit methods take `&mut self`.
/// Clone it to hand an independent copy (same tags, same config) to another
/// thread or request.
///
/// # Example
///
/// ```
/// use taglog::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let config = LogConfig::builder().threshold(LogLevel::Info).build();
///
/// let mut logger = Logger::with_config(config);
/// logger.set_output(sink.clone());
/// logger.add_tag("service", "billing");
/// logger.info("startup", &[&"listening on ", &8080]);
///
/// assert!(sink.contents().ends_with("event_id=startup service=\"billing\" listening on 8080\n"));
/// ```
#[derive(Clone)]
pub struct Logger {
    tags: Fields,
    meta: Fields,
    output: Option<Arc<dyn Sink>>,
    annotate_caller: bool,
    locator: Arc<dyn LocateCaller>,
    config: Arc<LogConfig>,
}

impl Logger {
    /// Create a logger bound to [`LogConfig::global`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogConfig::global())
    }

    #[must_use]
    pub fn with_config(config: Arc<LogConfig>) -> Self {
        Self {
            tags: Fields::new(),
            meta: Fields::new(),
            output: None,
            annotate_caller: false,
            locator: Arc::new(TrackedCaller),
            config,
        }
    }

    pub fn config(&self) -> &Arc<LogConfig> {
        &self.config
    }

    /// Add a persistent tag, replacing any previous value for `key`
    pub fn add_tag<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.tags.insert(key, value);
    }

    /// Merge persistent tags; later keys overwrite earlier ones
    pub fn add_tags<I, K, V>(&mut self, tags: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.tags.merge(tags);
    }

    pub fn remove_tag(&mut self, key: &str) -> Option<FieldValue> {
        self.tags.remove(key)
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Add metadata for the next record only
    pub fn add_meta<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.meta.insert(key, value);
    }

    /// Merge metadata for the next record only
    pub fn add_metas<I, K, V>(&mut self, meta: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.meta.merge(meta);
    }

    /// Tag every following record with the time elapsed since `start`,
    /// e.g. `duration="1.5s"`.
    pub fn add_duration(&mut self, start: Instant) {
        self.add_tag("duration", start.elapsed());
    }

    pub fn tags(&self) -> &Fields {
        &self.tags
    }

    pub fn meta(&self) -> &Fields {
        &self.meta
    }

    /// Replace the output for this logger only.
    pub fn set_output(&mut self, sink: Arc<dyn Sink>) {
        self.output = Some(sink);
    }

    /// The logger's own output, or the config's default sink.
    pub fn output(&self) -> Arc<dyn Sink> {
        match self.output {
            Some(ref sink) => Arc::clone(sink),
            None => self.config.sink(),
        }
    }

    /// Prefix every record with the caller's `file:line`.
    pub fn enable_caller_annotation(&mut self) {
        self.annotate_caller = true;
    }

    pub fn disable_caller_annotation(&mut self) {
        self.annotate_caller = false;
    }

    pub fn annotates_caller(&self) -> bool {
        self.annotate_caller
    }

    pub fn set_locator(&mut self, locator: Arc<dyn LocateCaller>) {
        self.locator = locator;
    }

    /// Emit `message` at `level`, reporting sink failures.
    ///
    /// Returns `Ok(true)` when the record was written and `Ok(false)` when
    /// the level filter rejected it. Metadata is cleared in every case.
    #[track_caller]
    pub fn try_log(&mut self, level: LogLevel, event_id: &str, message: &str) -> Result<bool> {
        let meta = self.meta.take();

        if !self.config.should_emit(level) {
            self.config.metrics().record_suppressed();
            return Ok(false);
        }

        let caller = if self.annotate_caller {
            // an unresolvable caller drops the annotation, never the record
            self.locator.locate(Location::caller()).ok()
        } else {
            None
        };

        let line = Record::new(level, event_id, message)
            .with_caller(caller)
            .with_tags(&self.tags)
            .with_meta(&meta)
            .render(&self.config.timestamp_format());

        match self.output().write(Channel::Out, line.as_bytes()) {
            Ok(()) => {
                self.config.metrics().record_emitted();
                Ok(true)
            }
            Err(e) => {
                self.config.metrics().record_write_failure();
                Err(e)
            }
        }
    }

    /// Emit `message` at `level`.
    ///
    /// A sink failure is reported on stderr and counted in the config's
    /// metrics instead of being returned.
    #[track_caller]
    pub fn log(&mut self, level: LogLevel, event_id: &str, message: &str) {
        if let Err(e) = self.try_log(level, event_id, message) {
            eprintln!(
                "[LOGGER ERROR] Sink '{}' failed to write {} record '{}': {}",
                self.output().name(),
                level,
                event_id,
                e
            );
        }
    }

    #[track_caller]
    fn log_plain(&mut self, level: LogLevel, event_id: &str, args: &[Arg<'_>]) {
        let message = concat(args);
        self.log(level, event_id, &message);
    }

    #[track_caller]
    fn log_formatted(&mut self, level: LogLevel, event_id: &str, args: &[Arg<'_>]) {
        let message = render_message(args);
        self.log(level, event_id, &message);
    }

    fn terminate(&self) {
        if let Err(e) = self.output().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        self.config.terminate();
    }

    #[track_caller]
    pub fn debug(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_plain(LogLevel::Debug, event_id, args);
    }

    /// The first argument is a `%s`-style template for the rest.
    #[track_caller]
    pub fn debugf(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_formatted(LogLevel::Debug, event_id, args);
    }

    #[track_caller]
    pub fn info(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_plain(LogLevel::Info, event_id, args);
    }

    #[track_caller]
    pub fn infof(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_formatted(LogLevel::Info, event_id, args);
    }

    #[track_caller]
    pub fn warn(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_plain(LogLevel::Warn, event_id, args);
    }

    #[track_caller]
    pub fn warnf(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_formatted(LogLevel::Warn, event_id, args);
    }

    #[track_caller]
    pub fn error(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_plain(LogLevel::Error, event_id, args);
    }

    #[track_caller]
    pub fn errorf(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_formatted(LogLevel::Error, event_id, args);
    }

    /// Emit at `CRITICAL`, then terminate the process if the config's
    /// critical-exit switch is on.
    #[track_caller]
    pub fn critical(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_plain(LogLevel::Critical, event_id, args);
        if self.config.critical_exit() {
            self.terminate();
        }
    }

    #[track_caller]
    pub fn criticalf(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_formatted(LogLevel::Critical, event_id, args);
        if self.config.critical_exit() {
            self.terminate();
        }
    }

    /// Emit at `ERROR`, then terminate the process regardless of the
    /// critical-exit switch.
    #[track_caller]
    pub fn fatal(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_plain(LogLevel::Error, event_id, args);
        self.terminate();
    }

    #[track_caller]
    pub fn fatalf(&mut self, event_id: &str, args: &[Arg<'_>]) {
        self.log_formatted(LogLevel::Error, event_id, args);
        self.terminate();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tags", &self.tags)
            .field("meta", &self.meta)
            .field("output", &self.output().name())
            .field("annotate_caller", &self.annotate_caller)
            .field("threshold", &self.config.threshold())
            .finish()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use taglog::prelude::*;
/// use std::sync::Arc;
///
/// let config = LogConfig::builder().critical_exit(false).build();
/// let logger = Logger::builder()
///     .config(config)
///     .tag("request_id", "7f3a")
///     .output(Arc::new(MemorySink::new()))
///     .caller_annotation(true)
///     .build();
///
/// assert_eq!(logger.tags().len(), 1);
/// assert!(logger.annotates_caller());
/// ```
pub struct LoggerBuilder {
    config: Option<Arc<LogConfig>>,
    tags: Fields,
    output: Option<Arc<dyn Sink>>,
    annotate_caller: bool,
    locator: Option<Arc<dyn LocateCaller>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: None,
            tags: Fields::new(),
            output: None,
            annotate_caller: false,
            locator: None,
        }
    }

    /// Bind to `config` instead of the global configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Arc<LogConfig>) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn tag<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.tags.insert(key, value);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, sink: Arc<dyn Sink>) -> Self {
        self.output = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn caller_annotation(mut self, enabled: bool) -> Self {
        self.annotate_caller = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn locator(mut self, locator: Arc<dyn LocateCaller>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = match self.config {
            Some(config) => Logger::with_config(config),
            None => Logger::new(),
        };

        logger.tags = self.tags;
        logger.output = self.output;
        logger.annotate_caller = self.annotate_caller;
        if let Some(locator) = self.locator {
            logger.locator = locator;
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
