//! File logging example
//!
//! Demonstrates sending every record of a logger to an append-only file.
//!
//! Run with: cargo run --example file_logging

use std::sync::Arc;
use taglog::prelude::*;

fn main() -> Result<()> {
    println!("=== taglog - File Logging Example ===\n");

    let sink = Arc::new(FileSink::new("application.log")?);
    let config = LogConfig::builder()
        .threshold(LogLevel::Info)
        .sink(sink.clone())
        .build();

    let mut logger = Logger::builder()
        .config(config)
        .tag("app", "file_logging")
        .build();

    println!("1. Logging to {}:", sink.path().display());
    logger.info("startup", &[&"Application started"]);
    logger.debug("startup", &[&"Loading configuration... (filtered)"]);
    logger.info("startup", &[&"Configuration loaded successfully"]);
    logger.warn("startup", &[&"Using default settings for some options"]);
    logger.error("plugin", &[&"Failed to load optional plugin"]);

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.add_meta("item", i);
        logger.infof("work", &[&"Processing item %d/5", &i]);
        if i == 3 {
            logger.warn("work", &[&"Item 3 took longer than expected"]);
        }
    }

    logger.info("shutdown", &[&"All operations completed"]);
    sink.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for the full log output", sink.path().display());

    Ok(())
}
