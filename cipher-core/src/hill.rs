// File:    hill.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: 2x2 Hill matrix cipher modulo 26.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Hill cipher over letter pairs with a 2x2 key matrix.
//!
//! Each pair `(x, y)` of alphabet indices becomes `M * [x, y] mod 26`.
//! Decryption multiplies by the inverse of `M` mod 26, which exists only when
//! the determinant is coprime with 26.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::alphabet::{letter_at, letter_index, mod_inverse, mod26, normalize};
use crate::error::{CipherError, Result};
use crate::transform::EncryptionResult;

/// Alphabet index of the padding letter `X`.
const PAD_INDEX: i64 = 23;

/// A 2x2 key matrix, serialized as a nested JSON array such as `[[3,3],[2,5]]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct HillKey([[i64; 2]; 2]);

/// Key used when the caller supplies none. Determinant 9, inverse 3.
pub const DEFAULT_KEY: HillKey = HillKey([[3, 3], [2, 5]]);

impl Default for HillKey {
    fn default() -> Self {
        DEFAULT_KEY
    }
}

impl HillKey {
    /// Wraps a row-major 2x2 matrix.
    #[must_use]
    pub const fn new(matrix: [[i64; 2]; 2]) -> Self {
        Self(matrix)
    }

    /// The matrix as given.
    #[must_use]
    pub const fn matrix(&self) -> [[i64; 2]; 2] {
        self.0
    }

    /// Parses a key written as JSON, e.g. `[[3,3],[2,5]]`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `json` is not a 2x2 integer matrix.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            CipherError::InvalidKey(format!(
                "Hill key must be a 2x2 integer matrix such as [[3,3],[2,5]]: {e}"
            ))
        })
    }

    /// The key as compact JSON, matching what [`HillKey::from_json`] accepts.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the matrix cannot be serialized.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CipherError::InvalidKey(format!("Hill key could not be serialized: {e}")))
    }

    /// Entries reduced mod 26.
    const fn reduced(&self) -> [[i64; 2]; 2] {
        let [[a, b], [c, d]] = self.0;
        [[mod26(a), mod26(b)], [mod26(c), mod26(d)]]
    }

    /// Determinant mod 26.
    #[must_use]
    pub const fn determinant(&self) -> i64 {
        let [[a, b], [c, d]] = self.reduced();
        mod26(a * d - b * c)
    }

    /// The inverse key mod 26, from the adjugate scaled by the determinant's inverse.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::NonInvertibleKey`] when the determinant shares a
    /// factor with 26.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        let det_inv = mod_inverse(determinant)
            .ok_or(CipherError::NonInvertibleKey { determinant })?;
        let [[a, b], [c, d]] = self.reduced();
        Ok(Self([
            [mod26(d * det_inv), mod26(-b * det_inv)],
            [mod26(-c * det_inv), mod26(a * det_inv)],
        ]))
    }

    /// True when the key can be decrypted.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        mod_inverse(self.determinant()).is_some()
    }

    const fn apply(&self, x: i64, y: i64) -> (i64, i64) {
        let [[a, b], [c, d]] = self.reduced();
        (mod26(a * x + b * y), mod26(c * x + d * y))
    }
}

/// Normalizes `text`, pads it to even length with `X` and multiplies each pair by `key`.
fn multiply_pairs(text: &str, key: &HillKey) -> String {
    let mut indices = normalize(text)
        .chars()
        .filter_map(letter_index)
        .map(i64::from)
        .collect::<Vec<_>>();
    if indices.len() % 2 != 0 {
        indices.push(PAD_INDEX);
    }
    indices
        .chunks_exact(2)
        .flat_map(|pair| {
            let (x, y) = key.apply(pair[0], pair[1]);
            [letter_at(x), letter_at(y)]
        })
        .collect()
}

/// Encrypts `text` with `key`, padding an odd-length text with `X`.
///
/// A non-invertible key still encrypts, but the result can never be decrypted.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the key cannot be echoed as JSON.
pub fn encrypt(text: &str, key: &HillKey) -> Result<EncryptionResult> {
    let echoed = key.to_json()?;
    if !key.is_invertible() {
        warn!("Hill key {echoed} is not invertible mod 26; the ciphertext cannot be decrypted");
    }
    Ok(EncryptionResult::new(multiply_pairs(text, key), echoed))
}

/// Decrypts `text` by applying the inverse of `key`.
///
/// # Errors
///
/// Returns [`CipherError::NonInvertibleKey`] when `key` has no inverse mod 26.
pub fn decrypt(text: &str, key: &HillKey) -> Result<EncryptionResult> {
    let inverse = key.inverse()?;
    Ok(EncryptionResult::new(
        multiply_pairs(text, &inverse),
        key.to_json()?,
    ))
}
