//! Logging for camera zoom
//!
//! - Replaceable logger via the `Logger` trait (see `Zoom::set_logger`)
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a global threshold
//! - Colored console output by default
//! - File and line information for ERROR logs

use std::fmt::Display;
use std::time::SystemTime;
use chrono::{DateTime, Local};
use colored::Colorize;

/// Logger trait for custom logging implementations
///
/// Hosts embedding the zoom tool usually forward entries to their own
/// console or log file.
///
/// # Example
///
/// ```no_run
/// use camera_zoom::zoom::log::{Logger, LogEntry};
///
/// struct HostConsole;
///
/// impl Logger for HostConsole {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}", entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "zoom::Zoom", "zoom::perspective")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogSeverity {
    /// Per-point and per-axis solver details
    Trace,

    /// Solver results (extremes, solved eye positions)
    Debug,

    /// Camera placements
    Info,

    /// Suspicious but accepted input
    Warn,

    /// Rejected calls (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the default formatter.
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Format an entry without colors:
/// `[timestamp] [SEVERITY] [source] message (file:line)`.
pub fn format_entry(entry: &LogEntry) -> String {
    layout(entry, entry.severity.label(), &entry.source)
}

/// Shared line layout; `severity` and `source` may carry console colors.
fn layout(entry: &LogEntry, severity: impl Display, source: impl Display) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let mut line = format!(
        "[{}] [{}] [{}] {}",
        datetime.format("%Y-%m-%d %H:%M:%S%.3f"),
        severity,
        source,
        entry.message
    );
    if let (Some(file), Some(number)) = (entry.file, entry.line) {
        line.push_str(&format!(" ({}:{})", file, number));
    }
    line
}

/// Default logger: `format_entry` layout on stderr, with the severity
/// colored (Trace dim, Debug cyan, Info green, Warn yellow, Error bold red)
/// and the source in blue.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        eprintln!("{}", layout(entry, severity, entry.source.bright_blue()));
    }
}

// ===== LOGGING MACROS =====

/// Log a message at `$severity` (a `LogSeverity` variant name)
#[doc(hidden)]
#[macro_export]
macro_rules! zoom_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::zoom::Zoom::log(
            $crate::zoom::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a TRACE message
#[macro_export]
macro_rules! zoom_trace {
    ($($arg:tt)*) => { $crate::zoom_log!(Trace, $($arg)*) };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! zoom_debug {
    ($($arg:tt)*) => { $crate::zoom_log!(Debug, $($arg)*) };
}

/// Log an INFO message
#[macro_export]
macro_rules! zoom_info {
    ($($arg:tt)*) => { $crate::zoom_log!(Info, $($arg)*) };
}

/// Log a WARN message
#[macro_export]
macro_rules! zoom_warn {
    ($($arg:tt)*) => { $crate::zoom_log!(Warn, $($arg)*) };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! zoom_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::zoom::Zoom::log_detailed(
            $crate::zoom::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
