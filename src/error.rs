// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the crate boundary.
//!
//! Classification itself is total and never fails - missing landmark data
//! routes to `Unsure` outcomes. Errors only arise at the boundary: reading
//! and parsing frame streams, and validating configuration.

use std::fmt;

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, GestureError>;

/// Main error type for the crate boundary.
#[derive(Debug)]
pub enum GestureError {
    /// Invalid configuration provided.
    ConfigError(String),
    /// Error parsing a frame record.
    ParseError {
        /// 1-based line number in the frame stream.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ParseError { line, message } => {
                write!(f, "Parse error at line {line}: {message}")
            }
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GestureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
