//! # cryptkit
//!
//! A from-scratch cryptographic toolkit for study and CTF work.
//!
//! The crates re-exported here implement the AES block cipher and the
//! classic modes of operation (ECB, CBC, OFB, CFB, CTR) directly from
//! their specifications, with bit-exact conformance to the published test
//! vectors. Readability wins over speed everywhere, and nothing is
//! constant-time — do not use this to protect real secrets.
//!
//! ## Crate structure
//!
//! This is a facade crate re-exporting the workspace members:
//!
//! - `cryptkit-api`: toolkit-level error types
//! - `cryptkit-common`: zeroizing secret buffers
//! - `cryptkit-params`: algorithm constants
//! - `cryptkit-algorithms`: the primitives themselves
//!
//! ## Example
//!
//! ```
//! use cryptkit::prelude::*;
//!
//! let key = [0u8; 16];
//! let iv = [0u8; 16];
//! let cipher = cryptkit::new_cipher(&key, Mode::Ctr, Some(&iv))?;
//! let secret = cipher.encrypt(b"flag{...}")?;
//! assert_eq!(cipher.decrypt(&secret)?, b"flag{...}");
//! # Ok::<(), cryptkit::api::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Core re-exports
pub use cryptkit_algorithms as algorithms;
pub use cryptkit_api as api;
pub use cryptkit_common as common;
pub use cryptkit_params as params;

use cryptkit_algorithms::block::modes::{CipherMode, Mode};
use cryptkit_algorithms::block::Aes;
use cryptkit_algorithms::error::to_core_result;

/// Builds an AES cipher bound to a mode of operation
///
/// Thin wrapper over [`algorithms::block::aes::new_cipher`] that surfaces
/// toolkit-level errors. The key length selects AES-128/192/256; chained
/// modes substitute an all-zero IV/nonce when `iv` is `None` (an
/// experimentation default only — supply a fresh IV for anything real).
pub fn new_cipher(key: &[u8], mode: Mode, iv: Option<&[u8]>) -> api::Result<CipherMode<Aes>> {
    to_core_result(
        cryptkit_algorithms::block::aes::new_cipher(key, mode, iv),
        "cipher construction",
    )
}

/// Common imports for cryptkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the cipher surface
    pub use crate::algorithms::block::modes::{CipherMode, Mode};
    pub use crate::algorithms::block::{Aes, BlockCipher, KeySize};
    pub use crate::new_cipher;

    // Re-export security types
    pub use crate::common::{SecretVec, SecureZeroingType};
}
