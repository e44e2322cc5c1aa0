//! Error type definitions for toolkit operations

use std::fmt;

/// Primary error type surfaced to toolkit users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation or algorithm that rejected the key
        context: &'static str,
        /// Human-readable detail
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Buffer or field whose length was wrong
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Parameter that was rejected
        context: &'static str,
        /// Human-readable detail
        message: String,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Human-readable detail
        message: String,
    },
}

/// Result type for toolkit operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key for {}: {}", context, message)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter '{}': {}", context, message)
            }
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}
