//! File sink implementation

use crate::core::{Channel, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends records from both channels to one file.
///
/// Writes are unbuffered: each record reaches the file before the emit call
/// returns.
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, _channel: Channel, record: &[u8]) -> Result<()> {
        self.file.lock().write_all(record)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.file.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.file.get_mut().flush();
    }
}
