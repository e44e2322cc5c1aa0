//! Error handling for cryptographic primitives

use core::fmt;

use cryptkit_api::{Error as CoreError, Result as CoreResult};

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key validation error
    Key {
        /// Cipher that rejected the key
        context: &'static str,
        /// Accepted key lengths, spelled out for the caller
        expected: &'static str,
        /// Actual length in bytes
        actual: usize,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Unrecognized mode-of-operation selector
    UnsupportedMode {
        /// The selector id that was rejected
        id: u32,
    },

    /// Field arithmetic called outside its domain; reserved for defensive
    /// checks and never expected during normal cipher operation
    Algebraic {
        /// Operation that was rejected
        operation: &'static str,
    },
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Key {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid key length for {}: got {} bytes, expected {}",
                    context, actual, expected
                )
            }
            Error::Length {
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
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::UnsupportedMode { id } => {
                write!(f, "Unsupported cipher mode selector {}", id)
            }
            Error::Algebraic { operation } => {
                write!(f, "Algebraic domain error in {}", operation)
            }
        }
    }
}

impl std::error::Error for Error {}

// Conversion into the toolkit-level error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Key {
                context,
                expected,
                actual,
            } => CoreError::InvalidKey {
                context,
                message: format!("got {} bytes, expected {}", actual, expected),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::UnsupportedMode { id } => CoreError::InvalidParameter {
                context: "mode selector",
                message: format!("unknown mode id {}", id),
            },
            Error::Algebraic { operation } => CoreError::Other {
                context: operation,
                message: "algebraic domain error".to_string(),
            },
        }
    }
}

/// Convert a primitives result to a toolkit result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
