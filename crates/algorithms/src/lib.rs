//! Cryptographic primitives, written from scratch for study and CTF work
//!
//! This crate reimplements the AES block cipher and the classic modes of
//! operation directly from their specifications. The goal is bit-exact
//! conformance with the published test vectors and code that can be read
//! next to FIPS 197, not speed.
//!
//! # Not a production library
//!
//! Nothing here is constant-time: S-boxes are table lookups and the field
//! arithmetic branches on secret data. Use a hardened library when actual
//! secrets are at stake.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// GF(2^8) field arithmetic
pub mod gf256;

// Block cipher implementations and modes of operation
pub mod block;
pub use block::{new_cipher, Aes, BlockCipher, Cbc, Cfb, CipherMode, Ctr, Ecb, KeySize, Mode, Ofb};
