//! Block cipher modes of operation
//!
//! Each mode composes a [`BlockCipher`] and its chaining configuration
//! (IV or nonce) into an encrypt/decrypt transform over whole buffers.
//! A mode instance is immutable: every call re-derives its chaining state
//! from the configured IV/nonce, so repeated calls with the same input
//! produce the same output.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{Error, Result};

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;

/// Mode-of-operation selector with stable numeric ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook
    Ecb = 0,
    /// Cipher block chaining
    Cbc = 1,
    /// Output feedback
    Ofb = 2,
    /// Cipher feedback (byte granularity)
    Cfb = 3,
    /// Counter
    Ctr = 4,
}

impl Mode {
    /// Resolves a numeric selector id
    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            0 => Ok(Mode::Ecb),
            1 => Ok(Mode::Cbc),
            2 => Ok(Mode::Ofb),
            3 => Ok(Mode::Cfb),
            4 => Ok(Mode::Ctr),
            _ => Err(Error::UnsupportedMode { id }),
        }
    }

    /// The stable numeric id of this selector
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Whether this mode consumes an IV or nonce at construction
    pub fn uses_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

/// A block cipher bound to one mode of operation
///
/// Tagged union over the concrete mode types; `encrypt`/`decrypt`
/// dispatch by match. Construct directly or through
/// [`new_cipher`](crate::block::aes::new_cipher).
#[derive(Debug)]
pub enum CipherMode<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    /// Electronic codebook
    Ecb(Ecb<B>),
    /// Cipher block chaining
    Cbc(Cbc<B>),
    /// Output feedback
    Ofb(Ofb<B>),
    /// Cipher feedback
    Cfb(Cfb<B>),
    /// Counter
    Ctr(Ctr<B>),
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> CipherMode<B> {
    /// Binds `cipher` to `mode`
    ///
    /// Modes that chain receive `iv`; when it is `None` an all-zero block
    /// is substituted. That fallback is an ergonomic default for
    /// experimentation, never a security default: real traffic needs a
    /// fresh IV/nonce per message. ECB ignores `iv` entirely.
    pub fn new(cipher: B, mode: Mode, iv: Option<&[u8]>) -> Result<Self> {
        let zero_iv = vec![0u8; cipher.block_size()];
        let iv = iv.unwrap_or(&zero_iv);
        Ok(match mode {
            Mode::Ecb => CipherMode::Ecb(Ecb::new(cipher)),
            Mode::Cbc => CipherMode::Cbc(Cbc::new(cipher, iv)?),
            Mode::Ofb => CipherMode::Ofb(Ofb::new(cipher, iv)?),
            Mode::Cfb => CipherMode::Cfb(Cfb::new(cipher, iv)?),
            Mode::Ctr => CipherMode::Ctr(Ctr::new(cipher, iv)?),
        })
    }

    /// The selector this instance was built with
    pub fn mode(&self) -> Mode {
        match self {
            CipherMode::Ecb(_) => Mode::Ecb,
            CipherMode::Cbc(_) => Mode::Cbc,
            CipherMode::Ofb(_) => Mode::Ofb,
            CipherMode::Cfb(_) => Mode::Cfb,
            CipherMode::Ctr(_) => Mode::Ctr,
        }
    }

    /// Encrypts a buffer under the bound mode
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self {
            CipherMode::Ecb(mode) => mode.encrypt(plaintext),
            CipherMode::Cbc(mode) => mode.encrypt(plaintext),
            CipherMode::Ofb(mode) => mode.encrypt(plaintext),
            CipherMode::Cfb(mode) => mode.encrypt(plaintext),
            CipherMode::Ctr(mode) => mode.encrypt(plaintext),
        }
    }

    /// Decrypts a buffer under the bound mode
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match self {
            CipherMode::Ecb(mode) => mode.decrypt(ciphertext),
            CipherMode::Cbc(mode) => mode.decrypt(ciphertext),
            CipherMode::Ofb(mode) => mode.decrypt(ciphertext),
            CipherMode::Cfb(mode) => mode.decrypt(ciphertext),
            CipherMode::Ctr(mode) => mode.decrypt(ciphertext),
        }
    }
}
