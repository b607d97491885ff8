//! In-memory sink
//!
//! Captures records for inspection, useful in tests and when the host
//! application ships log text itself.

use crate::core::{Channel, Result, Sink};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemorySink {
    out: Mutex<Vec<u8>>,
    err: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to the `Out` channel so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out.lock()).into_owned()
    }

    /// Everything written to the `Err` channel so far.
    pub fn err_contents(&self) -> String {
        String::from_utf8_lossy(&self.err.lock()).into_owned()
    }

    /// Records on the `Out` channel, without their trailing newline.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.out.lock().is_empty() && self.err.lock().is_empty()
    }

    pub fn clear(&self) {
        self.out.lock().clear();
        self.err.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, channel: Channel, record: &[u8]) -> Result<()> {
        let buffer = match channel {
            Channel::Out => &self.out,
            Channel::Err => &self.err,
        };
        buffer.lock().extend_from_slice(record);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
