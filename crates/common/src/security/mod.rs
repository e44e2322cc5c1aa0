//! Security primitives for sensitive byte buffers
//!
//! The types here guarantee zeroization on drop so that key material does
//! not linger in freed memory.

pub mod secret;

// Re-export core security types
pub use secret::{SecretVec, SecureZeroingType};
