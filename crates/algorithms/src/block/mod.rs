//! Block cipher implementations and modes of operation

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{new_cipher, Aes, KeySize};
pub use modes::{Cbc, Cfb, CipherMode, Ctr, Ecb, Mode, Ofb};

use crate::error::Result;

/// A fixed-block-size cipher: one encrypt/decrypt pair over a single block
///
/// The mode layer is generic over this trait, so any block cipher exposing
/// a block size and a per-block transform pair plugs into every mode
/// without changes to the mode code.
pub trait BlockCipher {
    /// Human-readable algorithm name, e.g. `"AES-128"`
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypts a single block in place
    ///
    /// The slice length must equal [`block_size`](Self::block_size).
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    ///
    /// The slice length must equal [`block_size`](Self::block_size).
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
