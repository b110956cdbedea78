//! Internal logging system for the Argus culling library
//!
//! This module provides a flexible logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Thread-safe logging with RwLock
//! - File and line information for detailed ERROR logs
//!
//! The classifier itself logs sparingly: plane rebuilds at Trace and
//! configuration rejections at Error. Queries never log.

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to create custom loggers (file logging, test capture, etc.)
///
/// # Example
///
/// ```no_run
/// use argus_culling::argus::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to process
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "argus::ViewVolume", "argus::Projection")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright black
/// - Debug: cyan
/// - Info: green
/// - Warn: yellow
/// - Error: red + bold
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        // Color severity string
        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        // Color source
        let source = entry.source.bright_blue();

        // Print with or without file:line
        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER REGISTRY =====

/// Global logger singleton (lazily initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Set a custom logger
///
/// Replace the default logger with a custom implementation (file logger, test capture, etc.)
///
/// # Arguments
///
/// * `logger` - Any type implementing the Logger trait
///
/// # Example
///
/// ```no_run
/// use argus_culling::argus::log::{set_logger, Logger, LogEntry};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// set_logger(FileLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(mut lock) = logger_lock.write() {
        *lock = Box::new(logger);
    }
}

/// Reset logger to default (DefaultLogger)
///
/// # Example
///
/// ```no_run
/// use argus_culling::argus::log::reset_logger;
///
/// reset_logger();
/// ```
pub fn reset_logger() {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(mut lock) = logger_lock.write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Internal dispatch for simple logs without file:line
///
/// Used by macros like argus_info!, argus_warn!, etc.
///
/// # Arguments
///
/// * `severity` - Log severity level
/// * `source` - Source module (e.g., "argus::ViewVolume")
/// * `message` - Log message
pub fn dispatch(severity: LogSeverity, source: &str, message: String) {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(lock) = logger_lock.read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Internal dispatch with file:line information (for ERROR logs)
///
/// Used by the argus_error! macro to include source location.
///
/// # Arguments
///
/// * `severity` - Log severity level (typically Error)
/// * `source` - Source module (e.g., "argus::Projection")
/// * `message` - Log message
/// * `file` - Source file path
/// * `line` - Source line number
pub fn dispatch_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(lock) = logger_lock.read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// argus_culling::argus_trace!("argus::ViewVolume", "entering calculate()");
/// ```
#[macro_export]
macro_rules! argus_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// argus_culling::argus_debug!("argus::ViewVolume", "rebuilt {} planes", 6);
/// ```
#[macro_export]
macro_rules! argus_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// argus_culling::argus_info!("argus::Demo", "view volume configured");
/// ```
#[macro_export]
macro_rules! argus_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// argus_culling::argus_warn!("argus::Demo", "keyhole radius {} exceeds far clip", 200.0);
/// ```
#[macro_export]
macro_rules! argus_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// argus_culling::argus_error!("argus::Projection", "rejected: {}", "aspect ratio must be positive");
/// ```
#[macro_export]
macro_rules! argus_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch_detailed(
            $crate::log::LogSeverity::Error,
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
