//! Error types for the format runtime
//!
//! A single crate-wide error enum covering the parser, the value
//! dispatch, and the sequence helpers. Every error is raised
//! synchronously to the immediate caller; nothing is retried.

use std::fmt;

/// Errors reported by this crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The format spec has unconsumed input after every recognized
    /// section, or a digit run overflowed the accumulator
    Parsing(String),
    /// The value has no rendering of its own and the fallback renderer
    /// does not exist
    UnsupportedOperation(String),
    /// A helper was called with an unusable set of arguments
    Argument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parsing(msg) => write!(f, "ParsingError: {}", msg),
            Error::UnsupportedOperation(msg) => write!(f, "UnsupportedOperation: {}", msg),
            Error::Argument(msg) => write!(f, "ArgumentError: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
