//! Shared functionality for the cryptkit toolkit
//!
//! This crate provides the secret-memory types used across cryptkit
//! components to ensure key material is wiped when no longer needed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod security;

// Re-export core security types
pub use security::{SecretVec, SecureZeroingType};
