//! Counter (CTR) mode
//!
//! The nonce, read as a big-endian integer, seeds a counter the width of
//! one block. Each block of keystream is the encryption of the current
//! counter value; the counter increments modulo 2^(8 * block size) after
//! every block. Encryption and decryption are the same operation, and a
//! trailing partial block simply consumes a keystream prefix.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CTR mode implementation
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    counter_block: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ctr<B> {
    /// Creates a new CTR mode instance with the given cipher and nonce
    ///
    /// The nonce may be at most one block long and is right-aligned into
    /// the counter block (big-endian interpretation).
    pub fn new(cipher: B, nonce: &[u8]) -> Result<Self> {
        let block_size = cipher.block_size();
        validate::max_length("CTR nonce", nonce.len(), block_size)?;

        let mut counter_block = vec![0u8; block_size];
        counter_block[block_size - nonce.len()..].copy_from_slice(nonce);
        Ok(Self {
            cipher,
            counter_block,
        })
    }

    /// Big-endian increment with wraparound across the whole block
    fn increment(counter: &mut [u8]) {
        for byte in counter.iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    /// Encrypts a message of any length, including empty
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut counter = self.counter_block.clone();

        for chunk in plaintext.chunks(block_size) {
            let mut keystream = counter.clone();
            self.cipher.encrypt_block(&mut keystream)?;
            // a final partial chunk consumes only a keystream prefix
            ciphertext.extend(chunk.iter().zip(&keystream).map(|(byte, key)| byte ^ key));
            Self::increment(&mut counter);
        }
        Ok(ciphertext)
    }

    /// Decrypts a message; in CTR mode this is the same operation as
    /// encryption
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}

#[cfg(test)]
mod tests;
