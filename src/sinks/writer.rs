//! Sink over arbitrary `io::Write` destinations

use crate::core::{Channel, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

type BoxedWriter = Box<dyn Write + Send>;

/// Writes records to an `out` writer and an `err` writer.
///
/// When built with [`WriterSink::single`], both channels share one writer.
pub struct WriterSink {
    out: Mutex<BoxedWriter>,
    err: Option<Mutex<BoxedWriter>>,
    name: String,
}

impl WriterSink {
    pub fn new<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Some(Mutex::new(Box::new(err))),
            name: "writer".to_string(),
        }
    }

    /// Both channels write to `writer`.
    pub fn single<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
            err: None,
            name: "writer".to_string(),
        }
    }

    /// Standard output for `Out`, standard error for `Err`.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr()).with_name("stdio")
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn writer(&self, channel: Channel) -> &Mutex<BoxedWriter> {
        match (channel, &self.err) {
            (Channel::Err, Some(err)) => err,
            _ => &self.out,
        }
    }
}

impl Default for WriterSink {
    fn default() -> Self {
        Self::stdio()
    }
}

impl Sink for WriterSink {
    fn write(&self, channel: Channel, record: &[u8]) -> Result<()> {
        let mut writer = self.writer(channel).lock();
        writer
            .write_all(record)
            .map_err(|e| LoggerError::io_operation("writing record", self.name.clone(), e))
    }

    fn flush(&self) -> Result<()> {
        self.out.lock().flush()?;
        if let Some(ref err) = self.err {
            err.lock().flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
