//! Parameter constants for the cryptkit toolkit

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod symmetric;
