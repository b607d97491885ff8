//! Integration tests for the logger
//!
//! These tests verify:
//! - Level filtering against the configured threshold
//! - Plain and formatted message rendering
//! - Tag persistence and one-shot metadata
//! - Caller annotation
//! - Critical and fatal termination hooks
//! - File output

use std::fmt;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use taglog::prelude::*;
use taglog::{debug, errorf, info};
use tempfile::TempDir;

fn capture(threshold: LogLevel) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let config = LogConfig::builder()
        .threshold(threshold)
        .sink(sink.clone())
        .critical_exit(false)
        .build();
    (Logger::with_config(config), sink)
}

#[derive(Debug)]
struct Salutation(&'static str);

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "salutation='{}'", self.0)
    }
}

impl std::error::Error for Salutation {}

#[test]
fn test_debug_suppressed_at_info() {
    let (mut logger, sink) = capture(LogLevel::Info);
    logger.debug("e1", &[&"hello"]);
    assert!(sink.is_empty(), "no bytes should reach the sink");
}

#[test]
fn test_debug_plain_concatenation() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.debug("e1", &[&"salutation='", &"hello world", &"'"]);

    let out = sink.contents();
    assert!(out.contains("DEBUG"));
    assert!(out.ends_with("event_id=e1 salutation='hello world'\n"));
}

#[test]
fn test_info_with_tag() {
    let (mut logger, sink) = capture(LogLevel::Info);
    logger.add_tag("foo", "bar");
    logger.info("e2", &[&"hi"]);
    assert!(sink.contents().ends_with("event_id=e2 foo=\"bar\" hi\n"));
}

#[test]
fn test_meta_appears_once() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.add_meta("m", "v");
    logger.debug("e3", &[]);
    logger.debug("e3", &[]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("m=\"v\""));
    assert!(!lines[1].contains("m=\"v\""));
}

#[test]
fn test_critical_without_exit() {
    let (mut logger, sink) = capture(LogLevel::Critical);
    let err = Salutation("hello brother");
    logger.critical("e4", &[&err]);

    let out = sink.contents();
    assert!(out.contains("CRITICAL"));
    assert!(out.ends_with("salutation='hello brother'\n"));
    assert_eq!(logger.config().metrics().terminations(), 0);
}

#[test]
fn test_errorf_substitution() {
    let (mut logger, sink) = capture(LogLevel::Error);
    logger.errorf("e5", &[&"salutation='%s'", &"hello sister"]);
    assert!(sink.contents().ends_with("event_id=e5 salutation='hello sister'\n"));
}

#[test]
fn test_every_level_and_variant() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.debug("d", &[&"salutation='", &"hello world", &"'"]);
    logger.debugf("d", &[&"salutation='%s'", &"hello world"]);
    logger.info("i", &[&"salutation='", &"hello mother", &"'"]);
    logger.infof("i", &[&"salutation='%s'", &"hello mother"]);
    logger.warn("w", &[&"salutation='", &"hello father", &"'"]);
    logger.warnf("w", &[&"salutation='%s'", &"hello father"]);
    logger.error("e", &[&"salutation='", &"hello sister", &"'"]);
    logger.errorf("e", &[&"salutation='%s'", &"hello sister"]);
    logger.critical("c", &[&"salutation='", &"hello brother", &"'"]);
    logger.criticalf("c", &[&"salutation='%s'", &"hello brother"]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 10);
    let expected = [
        ("DEBUG", "hello world"),
        ("INFO", "hello mother"),
        ("WARN", "hello father"),
        ("ERROR", "hello sister"),
        ("CRITICAL", "hello brother"),
    ];
    for (pair, (level, who)) in lines.chunks(2).zip(expected) {
        for line in pair {
            assert!(line.contains(&format!("[{}]", level)), "{}", line);
            assert!(line.ends_with(&format!("salutation='{}'", who)), "{}", line);
        }
    }
}

#[test]
fn test_threshold_change_applies_to_existing_loggers() {
    let (mut logger, sink) = capture(LogLevel::Error);
    let mut other = Logger::with_config(Arc::clone(logger.config()));
    other.set_output(sink.clone());

    logger.warn("w", &[&"hidden"]);
    logger.config().set_threshold(LogLevel::Warn);
    other.warn("w", &[&"shown"]);

    assert_eq!(sink.lines().len(), 1);
    assert!(sink.contents().ends_with("shown\n"));
}

#[test]
fn test_record_shape() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.info("shape", &[&"msg"]);

    let line = sink.lines().remove(0);
    let mut parts = line.splitn(3, ' ');
    let timestamp = parts.next().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(), "{}", timestamp);
    assert_eq!(parts.next(), Some("[INFO]"));
    assert_eq!(parts.next(), Some("event_id=shape msg"));
}

#[test]
fn test_caller_annotation_points_at_call_site() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.enable_caller_annotation();
    let line = line!() + 1;
    logger.info("here", &[&"x"]);

    let expected = format!("[INFO] integration_tests.rs:{} event_id=here x", line);
    assert!(sink.contents().contains(&expected), "{}", sink.contents());
}

#[test]
fn test_caller_annotation_through_macro() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.enable_caller_annotation();
    let line = line!() + 1;
    info!(logger, "macro", "n=", 1);

    let expected = format!("integration_tests.rs:{} event_id=macro n=1", line);
    assert!(sink.contents().contains(&expected), "{}", sink.contents());
}

#[test]
fn test_macros_match_methods() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    debug!(logger, "e1", "salutation='", "hello world", "'");
    errorf!(logger, "e5", "salutation='%s'", "hello sister");

    let lines = sink.lines();
    assert!(lines[0].ends_with("event_id=e1 salutation='hello world'"));
    assert!(lines[1].ends_with("event_id=e5 salutation='hello sister'"));
}

#[test]
fn test_quoted_tag_values() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.add_tag("query", r#"name = "ada""#);
    logger.info("q", &[]);
    assert!(sink.contents().contains(r#"query="name = \"ada\"" "#));
}

#[test]
fn test_tags_overwrite_in_place() {
    let (mut logger, sink) = capture(LogLevel::Debug);
    logger.add_tags([("a", 1), ("b", 2)]);
    logger.add_tag("a", 3);
    logger.info("t", &[]);
    assert!(sink.contents().contains("event_id=t a=\"3\" b=\"2\" "));
}

#[test]
fn test_critical_exit_invokes_terminator_after_write() {
    let sink = Arc::new(MemorySink::new());
    let written_before_exit = Arc::new(AtomicUsize::new(0));
    let sink_clone = Arc::clone(&sink);
    let seen = Arc::clone(&written_before_exit);

    let config = LogConfig::builder()
        .threshold(LogLevel::Critical)
        .sink(sink.clone())
        .terminator(Arc::new(move |code: i32| {
            assert_eq!(code, 1);
            seen.store(sink_clone.lines().len(), Ordering::SeqCst);
        }))
        .build();
    let mut logger = Logger::with_config(config);

    logger.critical("e4", &[&"unrecoverable"]);
    assert_eq!(written_before_exit.load(Ordering::SeqCst), 1);
}

#[test]
fn test_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let (mut logger, _sink) = capture(LogLevel::Info);
    logger.set_output(Arc::new(
        FileSink::new(&log_file).expect("Failed to create file sink"),
    ));
    logger.add_tag("svc", "api");

    logger.info("start", &[&"ready"]);
    logger.debug("noise", &[&"filtered"]);
    logger.warnf("slow", &[&"took %sms", &250]);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("event_id=start svc=\"api\" ready"));
    assert!(lines[1].ends_with("event_id=slow svc=\"api\" took 250ms"));
}

#[test]
fn test_log_injection_prevention() {
    let (mut logger, sink) = capture(LogLevel::Info);
    logger.add_meta("user", "ada\nCRITICAL fake");
    logger.info("login", &[&"ok\n2024-10-17T00:00:00Z [ERROR] event_id=fake"]);

    assert_eq!(sink.lines().len(), 1, "record must stay on one line");
    assert!(sink.contents().contains("\\n"));
}

#[test]
fn test_metrics_track_outcomes() {
    let (mut logger, _sink) = capture(LogLevel::Warn);
    logger.info("i", &[]);
    logger.warn("w", &[]);
    logger.error("e", &[]);

    let metrics = logger.config().metrics();
    assert_eq!(metrics.suppressed_count(), 1);
    assert_eq!(metrics.emitted_count(), 2);
    assert_eq!(metrics.write_failures(), 0);
}
