//! Free-function entry points over the global configuration
//!
//! Each call logs through a fresh, tagless [`Logger`] bound to
//! [`LogConfig::global`], so the global threshold and sink apply.
//!
//! ```no_run
//! use taglog::global;
//! use taglog::LogLevel;
//!
//! global::set_level(LogLevel::Info);
//! global::info("startup", &[&"ready"]);
//! global::debugf("cache", &[&"%d entries", &128]); // filtered out
//! ```

use crate::core::{Arg, LogConfig, LogLevel, Logger, Sink, Terminator};
use std::sync::Arc;

/// Source path of this module, used to recognise call sites inside the logger.
pub(crate) const SOURCE_FILE: &str = file!();

pub fn level() -> LogLevel {
    LogConfig::global().threshold()
}

pub fn set_level(level: LogLevel) {
    LogConfig::global().set_threshold(level);
}

/// Replace the global default sink.
pub fn set_output(sink: Arc<dyn Sink>) {
    LogConfig::global().set_sink(sink);
}

pub fn set_critical_exit(enabled: bool) {
    LogConfig::global().set_critical_exit(enabled);
}

pub fn set_terminator(terminator: Terminator) {
    LogConfig::global().set_terminator(terminator);
}

#[track_caller]
pub fn log(level: LogLevel, event_id: &str, message: &str) {
    Logger::new().log(level, event_id, message);
}

#[track_caller]
pub fn debug(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().debug(event_id, args);
}

#[track_caller]
pub fn debugf(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().debugf(event_id, args);
}

#[track_caller]
pub fn info(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().info(event_id, args);
}

#[track_caller]
pub fn infof(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().infof(event_id, args);
}

#[track_caller]
pub fn warn(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().warn(event_id, args);
}

#[track_caller]
pub fn warnf(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().warnf(event_id, args);
}

#[track_caller]
pub fn error(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().error(event_id, args);
}

#[track_caller]
pub fn errorf(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().errorf(event_id, args);
}

#[track_caller]
pub fn critical(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().critical(event_id, args);
}

#[track_caller]
pub fn criticalf(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().criticalf(event_id, args);
}

#[track_caller]
pub fn fatal(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().fatal(event_id, args);
}

#[track_caller]
pub fn fatalf(event_id: &str, args: &[Arg<'_>]) {
    Logger::new().fatalf(event_id, args);
}
