//! Sink trait for record destinations

use super::error::Result;

/// Logical output channel of a sink.
///
/// Every level is currently routed to `Out`; `Err` is reserved for
/// error-class output and defaults to the process's standard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Out,
    Err,
}

/// Destination for rendered records.
///
/// `write` receives one complete record. Implementations must write it
/// atomically with respect to other `write` calls on the same sink so that
/// concurrent emitters never interleave partial lines.
pub trait Sink: Send + Sync {
    fn write(&self, channel: Channel, record: &[u8]) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
