//! AES block cipher
//!
//! This module implements the Advanced Encryption Standard (AES) as
//! specified in FIPS 197, for all three key sizes. The implementation is
//! the straightforward table-driven one: a 4x4 state matrix, lookup
//! S-boxes, and MixColumns products evaluated in [`gf256`](crate::gf256).
//! It is written for clarity and test-vector fidelity; it makes no attempt
//! at constant-time behavior.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::modes::{CipherMode, Mode};
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};
use crate::gf256;
use cryptkit_common::security::SecretVec;
use cryptkit_params::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS, AES_BLOCK_SIZE,
};

mod state;
use state::State;


/// AES forward S-box (FIPS 197 figure 7)
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// AES inverse S-box (FIPS 197 figure 14)
const INV_SBOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

/// AES key length variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 16-byte key, 10 rounds
    Aes128,
    /// 24-byte key, 12 rounds
    Aes192,
    /// 32-byte key, 14 rounds
    Aes256,
}

impl KeySize {
    /// Selects the variant for a key of `len` bytes
    pub fn from_key_length(len: usize) -> Result<Self> {
        match len {
            AES128_KEY_SIZE => Ok(KeySize::Aes128),
            AES192_KEY_SIZE => Ok(KeySize::Aes192),
            AES256_KEY_SIZE => Ok(KeySize::Aes256),
            _ => Err(Error::Key {
                context: "AES",
                expected: "16, 24 or 32 bytes",
                actual: len,
            }),
        }
    }

    /// Key length in bytes
    pub fn key_length(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_KEY_SIZE,
            KeySize::Aes192 => AES192_KEY_SIZE,
            KeySize::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Number of cipher rounds for this key size
    pub fn rounds(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_ROUNDS,
            KeySize::Aes192 => AES192_ROUNDS,
            KeySize::Aes256 => AES256_ROUNDS,
        }
    }

    /// Variant name
    pub fn name(self) -> &'static str {
        match self {
            KeySize::Aes128 => "AES-128",
            KeySize::Aes192 => "AES-192",
            KeySize::Aes256 => "AES-256",
        }
    }
}

fn rot_word(word: [u8; 4]) -> [u8; 4] {
    [word[1], word[2], word[3], word[0]]
}

fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(|byte| SBOX[byte as usize])
}

/// Expands the master key into `rounds + 1` flat 16-byte round keys
///
/// Word-based expansion per FIPS 197 section 5.2: each generation step
/// rotates and substitutes the previous word and folds in the round
/// constant `2^i mod 0x11b`; 32-byte keys substitute once more halfway
/// through each eight-word group.
fn expand_key(key: &[u8], size: KeySize) -> Result<SecretVec> {
    let key_words = key.len() / 4;
    let total_words = 4 * (size.rounds() + 1);
    let iterations = size.rounds() * 4 / key_words;

    let mut words: Vec<[u8; 4]> = key
        .chunks_exact(4)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect();

    for i in 0..iterations {
        let last = words[words.len() - 1];
        let (_, rcon) = gf256::poly_divmod(1 << i, gf256::REDUCTION_POLY)?;
        let mut temp = sub_word(rot_word(last));
        temp[0] ^= rcon as u8;
        for j in 0..key_words {
            if key_words == 8 && j == 4 {
                temp = sub_word(temp);
            }
            let base = words[i * key_words + j];
            let mut next = [0u8; 4];
            for (k, byte) in next.iter_mut().enumerate() {
                *byte = base[k] ^ temp[k];
            }
            words.push(next);
            temp = next;
        }
    }
    // 24- and 32-byte keys overshoot the schedule by a partial group
    words.truncate(total_words);

    let mut flat = Vec::with_capacity(total_words * 4);
    for word in &words {
        flat.extend_from_slice(word);
    }
    words.zeroize();
    Ok(SecretVec::new(flat))
}

/// AES block cipher with precomputed round keys
///
/// The variant (AES-128/192/256) is selected by the key length passed to
/// [`Aes::new`]; any other length is rejected before any expansion runs.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    #[zeroize(skip)]
    size: KeySize,
    round_keys: SecretVec,
}

impl Aes {
    /// Creates a cipher instance, expanding the key schedule once
    pub fn new(key: &[u8]) -> Result<Self> {
        let size = KeySize::from_key_length(key.len())?;
        let round_keys = expand_key(key, size)?;
        Ok(Aes { size, round_keys })
    }

    /// The key size variant this instance was constructed with
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Generates a uniformly random key of the given size
    pub fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, size: KeySize) -> SecretVec {
        let mut key = vec![0u8; size.key_length()];
        rng.fill_bytes(&mut key);
        SecretVec::new(key)
    }

    /// Round key `round` as a state matrix
    fn round_key(&self, round: usize) -> State {
        let offset = round * AES_BLOCK_SIZE;
        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(&self.round_keys.as_slice()[offset..offset + AES_BLOCK_SIZE]);
        State::from_block(&block)
    }
}

impl BlockCipher for Aes {
    fn name(&self) -> &'static str {
        self.size.name()
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut buf = [0u8; AES_BLOCK_SIZE];
        buf.copy_from_slice(block);
        let mut state = State::from_block(&buf);

        state.xor(&self.round_key(0));
        for round in 1..self.size.rounds() {
            state.substitute(&SBOX);
            state.shift_rows();
            state.mix_columns();
            state.xor(&self.round_key(round));
        }
        // final round has no MixColumns
        state.substitute(&SBOX);
        state.shift_rows();
        state.xor(&self.round_key(self.size.rounds()));

        block.copy_from_slice(&state.to_block());
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let rounds = self.size.rounds();
        let mut buf = [0u8; AES_BLOCK_SIZE];
        buf.copy_from_slice(block);
        let mut state = State::from_block(&buf);

        state.xor(&self.round_key(rounds));
        state.inv_shift_rows();
        state.substitute(&INV_SBOX);
        for round in (1..rounds).rev() {
            state.xor(&self.round_key(round));
            state.inv_mix_columns();
            state.inv_shift_rows();
            state.substitute(&INV_SBOX);
        }
        state.xor(&self.round_key(0));

        block.copy_from_slice(&state.to_block());
        Ok(())
    }
}

/// Builds an AES cipher bound to a mode of operation
///
/// The key length selects the AES variant. Modes that chain (CBC, OFB,
/// CFB, CTR) fall back to an all-zero IV/nonce when none is supplied;
/// that default exists for experimentation only and carries none of the
/// uniqueness an IV is supposed to provide.
pub fn new_cipher(key: &[u8], mode: Mode, iv: Option<&[u8]>) -> Result<CipherMode<Aes>> {
    let cipher = Aes::new(key)?;
    CipherMode::new(cipher, mode, iv)
}
