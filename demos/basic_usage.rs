//! Basic logger usage example
//!
//! Demonstrates levels, tags, one-shot metadata and caller annotation on
//! standard output.
//!
//! Run with: cargo run --example basic_usage

use std::time::Instant;
use taglog::prelude::*;
use taglog::{infof, warn};

fn main() {
    println!("=== taglog - Basic Usage Example ===\n");

    let config = LogConfig::builder()
        .threshold(LogLevel::Debug)
        .critical_exit(false)
        .build();
    let mut logger = Logger::with_config(config);

    println!("1. Logging at different levels:");
    logger.debug("levels", &[&"This is a debug message"]);
    logger.info("levels", &[&"This is an info message"]);
    logger.warn("levels", &[&"This is a warning message"]);
    logger.error("levels", &[&"This is an error message"]);
    logger.critical("levels", &[&"This is a critical message (exit disabled)"]);

    println!("\n2. Raising the threshold to WARN - debug and info won't show:");
    logger.config().set_threshold(LogLevel::Warn);
    logger.debug("threshold", &[&"Debug message (hidden)"]);
    logger.info("threshold", &[&"Info message (hidden)"]);
    logger.warn("threshold", &[&"Warning message (visible)"]);
    logger.config().set_threshold(LogLevel::Debug);

    println!("\n3. Tags persist, metadata is one-shot:");
    logger.add_tag("service", "checkout");
    logger.add_meta("order", 1042);
    logger.info("order", &[&"created"]);
    logger.info("order", &[&"tags only"]);

    println!("\n4. Formatted messages and macros:");
    let started = Instant::now();
    logger.infof("payment", &[&"charged %d cents to %s", &1999, &"card"]);
    logger.add_duration(started);
    infof!(logger, "payment", "settled in %s", "one step");
    warn!(logger, "payment", "retry ", 2, " of ", 3);

    println!("\n5. Caller annotation:");
    logger.enable_caller_annotation();
    logger.info("caller", &[&"this line names its call site"]);

    println!("\n=== Example completed successfully! ===");
}
