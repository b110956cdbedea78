//! Error types for the Argus culling library
//!
//! Classification itself never fails - queries are pure arithmetic - so
//! the only errors are configuration-time rejections.

use std::fmt;

/// Result type for Argus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Argus culling errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Projection parameters describe a degenerate view volume
    /// (see `Projection::new` for the accepted ranges)
    InvalidProjection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
