//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod fields;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod sink;
pub mod template;
pub mod timestamp;

pub use caller::{CallerLocation, LocateCaller, TrackedCaller};
pub use config::{
    parse_level_setting, LogConfig, LogConfigBuilder, Terminator, EXIT_CODE, LEVEL_ENV_VAR,
};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use log_level::{should_emit, should_emit_str, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use sink::{Channel, Sink};
pub use template::Arg;
pub use timestamp::{format_duration, TimestampFormat};
