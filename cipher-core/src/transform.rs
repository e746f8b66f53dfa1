// File:    transform.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The value every cipher returns, and the encrypt/decrypt direction.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Output of a single encrypt or decrypt call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncryptionResult {
    /// The transformed text.
    pub result: String,
    /// The key actually used. For a generated one-time pad this is the only copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl EncryptionResult {
    /// Builds a result that echoes the key used.
    #[must_use]
    pub fn new(result: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            key: Some(key.into()),
        }
    }
}

/// Which way a cipher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Direction {
    /// Sign applied to additive shifts: `+1` to encrypt, `-1` to decrypt.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Encrypt => 1,
            Self::Decrypt => -1,
        }
    }
}
