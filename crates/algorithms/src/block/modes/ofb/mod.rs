//! Output Feedback (OFB) mode
//!
//! The keystream is generated by repeatedly encrypting the IV:
//! `S[i] = E(S[i-1])`, independent of the data. Encryption and decryption
//! are the same XOR against that stream, and both directions use the
//! block cipher's forward transform only.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// OFB mode implementation
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ofb<B> {
    /// Creates a new OFB mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the cipher's block.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("OFB initialization vector", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    fn apply_keystream(&self, data: &[u8], context: &'static str) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned(context, data.len(), block_size)?;

        let mut output = Vec::with_capacity(data.len());
        let mut feedback = self.iv.clone();

        for chunk in data.chunks(block_size) {
            self.cipher.encrypt_block(&mut feedback)?;
            output.extend(chunk.iter().zip(&feedback).map(|(byte, key)| byte ^ key));
        }
        Ok(output)
    }

    /// Encrypts a message using OFB mode
    ///
    /// The plaintext must be a whole number of blocks.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(plaintext, "OFB plaintext")
    }

    /// Decrypts a message using OFB mode; the same keystream XOR as
    /// encryption
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(ciphertext, "OFB ciphertext")
    }
}
