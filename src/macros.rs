//! Logging macros that build the argument list for the emit methods.
//!
//! Every macro takes a logger, an event id and any number of displayable
//! values. The plain forms concatenate the values; the `f`-suffixed forms
//! treat the first value as a `%s`-style template.
//!
//! # Examples
//!
//! ```
//! use taglog::prelude::*;
//! use taglog::{info, errorf};
//!
//! let config = LogConfig::builder().sink(std::sync::Arc::new(MemorySink::new())).build();
//! let mut logger = Logger::with_config(config);
//!
//! // Plain concatenation
//! info!(logger, "server", "listening on port ", 8080);
//!
//! // Template substitution
//! let code = 500;
//! errorf!(logger, "request", "status=%d path=%s", code, "/health");
//! ```

/// Log a preformatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let mut logger = Logger::with_config(LogConfig::builder().sink(std::sync::Arc::new(MemorySink::new())).build());
/// use taglog::log;
/// log!(logger, LogLevel::Info, "job", "Simple message");
/// log!(logger, LogLevel::Warn, "job", "retry ", 3, " of ", 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            $event,
            &$crate::core::template::concat(&[$(&$arg as &dyn ::core::fmt::Display),*]),
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let mut logger = Logger::with_config(LogConfig::builder().sink(std::sync::Arc::new(MemorySink::new())).build());
/// use taglog::debug;
/// debug!(logger, "cache", "Counter value: ", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.debugf($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.infof($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.warnf($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorf($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Log a critical-level message, terminating the process when the logger's
/// config has critical exit enabled.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let config = LogConfig::builder().sink(std::sync::Arc::new(MemorySink::new())).critical_exit(false).build();
/// # let mut logger = Logger::with_config(config);
/// use taglog::critical;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
/// critical!(logger, "storage", err);
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.critical($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! criticalf {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.criticalf($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Log an error-level message, then terminate the process unconditionally.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatalf($event, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}
