//! Record construction
//!
//! A record is the single line produced by one emit call:
//!
//! ```text
//! <timestamp> [<LEVEL>] <file:line >event_id=<id> <k="v" ...><meta="v" ...><message>\n
//! ```
//!
//! Records are never stored; [`Record::render`] produces the text written to
//! the sink.

use super::caller::CallerLocation;
use super::fields::Fields;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};

/// Inputs for one rendered line. Tags and metadata are borrowed from the
/// logger that emits the record.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    pub caller: Option<CallerLocation>,
    pub event_id: &'a str,
    pub tags: Option<&'a Fields>,
    pub meta: Option<&'a Fields>,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Escape line breaks so one record is always one line.
    fn sanitize(text: &str) -> std::borrow::Cow<'_, str> {
        if text.contains(['\n', '\r']) {
            text.replace('\n', "\\n").replace('\r', "\\r").into()
        } else {
            text.into()
        }
    }

    pub fn new(level: LogLevel, event_id: &'a str, message: &'a str) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            caller: None,
            event_id,
            tags: None,
            meta: None,
            message,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_caller(mut self, caller: Option<CallerLocation>) -> Self {
        self.caller = caller;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &'a Fields) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: &'a Fields) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Render the newline-terminated line.
    pub fn render(&self, timestamp_format: &TimestampFormat) -> String {
        let mut line = String::with_capacity(64 + self.message.len());

        line.push_str(&timestamp_format.format(&self.timestamp));
        line.push_str(" [");
        line.push_str(self.level.to_str());
        line.push_str("] ");

        if let Some(ref caller) = self.caller {
            line.push_str(&caller.to_string());
            line.push(' ');
        }

        line.push_str("event_id=");
        line.push_str(&Self::sanitize(self.event_id));
        line.push(' ');

        for fields in [self.tags, self.meta].into_iter().flatten() {
            fields.write_to(&mut line);
        }

        line.push_str(&Self::sanitize(self.message));
        line.push('\n');
        line
    }
}
