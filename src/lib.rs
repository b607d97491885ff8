//! # taglog
//!
//! A lightweight, leveled logger producing one greppable text line per event:
//!
//! ```text
//! 2025-01-08T10:30:45Z [INFO] handler.rs:42 event_id=login user="ada" attempt="2" accepted
//! ```
//!
//! ## Features
//!
//! - **Five severities**: `DEBUG < INFO < WARN < ERROR < CRITICAL`, filtered
//!   against one process-wide threshold (`LOG_LEVEL`)
//! - **Persistent tags**: key/value pairs repeated on every record of a logger
//! - **One-shot metadata**: key/value pairs attached to the next record only
//! - **Caller annotation**: optional `file:line` of the emitting call
//! - **Critical exit**: `CRITICAL` records can terminate the process through
//!   a replaceable hook
//!
//! ## Example
//!
//! ```
//! use taglog::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = LogConfig::builder()
//!     .threshold(LogLevel::Info)
//!     .sink(sink.clone())
//!     .build();
//!
//! let mut logger = Logger::with_config(config);
//! logger.add_tag("user", "ada");
//! logger.add_meta("attempt", 2);
//! logger.info("login", &[&"accepted"]);
//! logger.debug("login", &[&"hidden"]);
//!
//! assert_eq!(sink.lines().len(), 1);
//! assert!(sink.contents().ends_with("event_id=login user=\"ada\" attempt=\"2\" accepted\n"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{MemorySink, WriterSink};
    pub use crate::core::{
        Arg, CallerLocation, Channel, FieldValue, Fields, LocateCaller, LogConfig,
        LogConfigBuilder, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result,
        Sink, Terminator, TimestampFormat,
    };
}

#[cfg(feature = "file")]
pub use crate::sinks::FileSink;
pub use crate::sinks::{MemorySink, WriterSink};
pub use crate::core::{
    format_duration, parse_level_setting, should_emit, should_emit_str, Arg, CallerLocation,
    Channel, FieldValue, Fields, LocateCaller, LogConfig, LogConfigBuilder, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Record, Result, Sink, Terminator,
    TimestampFormat, TrackedCaller, EXIT_CODE, LEVEL_ENV_VAR,
};
