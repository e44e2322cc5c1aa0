//! Electronic Codebook (ECB) mode
//!
//! Each block is encrypted independently, so identical plaintext blocks
//! produce identical ciphertext blocks. That leakage is the classic ECB
//! weakness; the mode is kept for study and as the building block the
//! other modes are measured against.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Creates a new ECB mode instance; no chaining state is involved
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts a message block by block
    ///
    /// The plaintext must be a whole number of blocks; padding is the
    /// caller's responsibility.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("ECB plaintext", plaintext.len(), block_size)?;

        let mut ciphertext = plaintext.to_vec();
        for chunk in ciphertext.chunks_exact_mut(block_size) {
            self.cipher.encrypt_block(chunk)?;
        }
        Ok(ciphertext)
    }

    /// Decrypts a message block by block
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("ECB ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = ciphertext.to_vec();
        for chunk in plaintext.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(chunk)?;
        }
        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests;
