//! Public API surface for the cryptkit toolkit
//!
//! This crate carries the error type shared by every cryptkit component.
//! Algorithm crates keep their own, more precise error enums and convert
//! into [`Error`] at the toolkit boundary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

pub use error::{Error, Result};
