//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. Encryption is
//! inherently sequential, decryption of any block needs only the block
//! before it.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CBC mode implementation
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the cipher's block.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a whole number of blocks; padding is the
    /// caller's responsibility.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("CBC plaintext", plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = self.iv.clone();

        for chunk in plaintext.chunks(block_size) {
            let mut block = chunk.to_vec();
            for (byte, prev) in block.iter_mut().zip(&prev_block) {
                *byte ^= prev;
            }
            self.cipher.encrypt_block(&mut block)?;
            ciphertext.extend_from_slice(&block);
            prev_block = block;
        }
        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block = self.iv.clone();

        for chunk in ciphertext.chunks(block_size) {
            let mut block = chunk.to_vec();
            self.cipher.decrypt_block(&mut block)?;
            for (byte, prev) in block.iter_mut().zip(&prev_block) {
                *byte ^= prev;
            }
            plaintext.extend_from_slice(&block);
            prev_block = chunk.to_vec();
        }
        Ok(plaintext)
    }
}
