//! Error handling for GCodeSim
//!
//! Provides the error types shared across the workspace:
//! - G-Code errors (malformed words, unreadable program files)
//! - The unified `Error` type used in public APIs
//!
//! Parse-time problems are recoverable. The parser and loader record them as
//! diagnostics built from these types instead of returning `Err`.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// G-Code error type
///
/// Represents errors related to G-Code parsing and program loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// A word's payload could not be parsed as the expected number
    #[error("Invalid parameter '{param}' at line {line_number}: {reason}")]
    InvalidParameter {
        /// The line number where the invalid parameter was found.
        line_number: u32,
        /// The offending word, as written in the program.
        param: String,
        /// The reason the parameter is invalid.
        reason: String,
    },

    /// Program file could not be opened or read
    #[error("File error for {path}: {reason}")]
    FileError {
        /// The path that failed.
        path: String,
        /// The reason for the file error.
        reason: String,
    },
}

/// Main error type for GCodeSim
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// G-Code error
    #[error(transparent)]
    Gcode(#[from] GcodeError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
