//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 round count
pub const AES128_ROUNDS: usize = 10;

/// AES-192 round count
pub const AES192_ROUNDS: usize = 12;

/// AES-256 round count
pub const AES256_ROUNDS: usize = 14;
