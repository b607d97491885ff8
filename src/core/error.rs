//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Level name outside the rank table
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// No stack frame outside the logger could be attributed to the call
    #[error("No caller found outside of the logger")]
    CallerNotFound,

    /// Failure reported by a custom sink
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create a writer error for a custom sink
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("VERBOSE");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::writer("sink closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::invalid_level("loud").to_string(),
            "Invalid log level: 'loud'"
        );
        assert_eq!(
            LoggerError::CallerNotFound.to_string(),
            "No caller found outside of the logger"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing record", "sink rejected write", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing record"));
        assert!(err.to_string().contains("sink rejected write"));
    }
}
