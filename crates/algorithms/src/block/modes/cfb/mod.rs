//! Cipher Feedback (CFB) mode, one byte at a time
//!
//! A full-block shift register seeded with the IV is encrypted for every
//! byte; the top keystream byte is XORed with the data byte and the
//! resulting ciphertext byte is shifted into the register. Working at
//! byte granularity means any message length is handled without padding.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CFB mode implementation (8-bit feedback)
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cfb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cfb<B> {
    /// Creates a new CFB mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the cipher's block.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CFB initialization vector", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    /// Encrypts a message of any length, including empty
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut register = self.iv.clone();
        let mut ciphertext = Vec::with_capacity(plaintext.len());

        for &byte in plaintext {
            let mut keystream = register.clone();
            self.cipher.encrypt_block(&mut keystream)?;
            let encrypted = byte ^ keystream[0];
            ciphertext.push(encrypted);
            // shift the ciphertext byte into the register
            register.rotate_left(1);
            let last = register.len() - 1;
            register[last] = encrypted;
        }
        Ok(ciphertext)
    }

    /// Decrypts a message of any length, including empty
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut register = self.iv.clone();
        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for &byte in ciphertext {
            let mut keystream = register.clone();
            self.cipher.encrypt_block(&mut keystream)?;
            plaintext.push(byte ^ keystream[0]);
            // feedback is the ciphertext byte on both directions
            register.rotate_left(1);
            let last = register.len() - 1;
            register[last] = byte;
        }
        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests;
