//! Error types for Calends
//!
//! This module defines the error taxonomy shared by every Calends crate.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant carries a fully formed message. The message is the whole
//! `Display` output, so callers can compare it verbatim.

use thiserror::Error;

/// Result type alias for Calends operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Calends
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid argument: bad constructor input, a type mismatch, or a
    /// lookup-by-value miss
    #[error("{0}")]
    Argument(String),

    /// Text could not be parsed or formatted: a lookup-by-name miss, a
    /// pattern mismatch, or an unknown format specifier
    #[error("{0}")]
    Format(String),

    /// The operation is not valid for the given input, such as parsing
    /// with a format that is not parseable
    #[error("{0}")]
    InvalidOperation(String),

    /// A conversion the string bridge does not support
    #[error("{0}")]
    NotSupported(String),
}

impl Error {
    /// Create an [`Error::Argument`]
    pub fn argument(message: impl Into<String>) -> Self {
        Error::Argument(message.into())
    }

    /// Create an [`Error::Format`]
    pub fn format(message: impl Into<String>) -> Self {
        Error::Format(message.into())
    }

    /// Create an [`Error::InvalidOperation`]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation(message.into())
    }

    /// Create an [`Error::NotSupported`]
    pub fn not_supported(message: impl Into<String>) -> Self {
        Error::NotSupported(message.into())
    }

    /// Check if this is an argument error
    pub fn is_argument(&self) -> bool {
        matches!(self, Error::Argument(_))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if this is an invalid-operation error
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Error::InvalidOperation(_))
    }

    /// Check if this is a not-supported error
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Error::NotSupported(_))
    }

    /// The message carried by this error
    pub fn message(&self) -> &str {
        match self {
            Error::Argument(m)
            | Error::Format(m)
            | Error::InvalidOperation(m)
            | Error::NotSupported(m) => m,
        }
    }
}
