// File:    otp.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Additive one-time pad over the 26-letter alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! One-time pad over letters.
//!
//! Each letter is shifted by the matching pad letter, so the pad must be
//! exactly as long as the normalized text. A generated pad is returned in the
//! result's `key` and is never stored anywhere else; lose it and the
//! ciphertext cannot be decrypted.

use rand::Rng;

use crate::alphabet::{MODULUS, letter_at, letter_index, normalize};
use crate::error::{CipherError, Result};
use crate::transform::{Direction, EncryptionResult};

/// Generates a pad of `length` uniformly random letters.
#[must_use]
pub fn generate_key<R: Rng>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| letter_at(rng.random_range(0..MODULUS)))
        .collect()
}

/// Encrypts `text` with a fresh pad from the thread-local generator.
#[must_use]
pub fn encrypt(text: &str) -> EncryptionResult {
    encrypt_with_rng(text, &mut rand::rng())
}

/// Encrypts `text` with a fresh pad drawn from `rng`.
#[must_use]
pub fn encrypt_with_rng<R: Rng>(text: &str, rng: &mut R) -> EncryptionResult {
    let text = normalize(text);
    let key = generate_key(text.len(), rng);
    let result = combine(&text, &key, Direction::Encrypt);
    EncryptionResult::new(result, key)
}

/// Encrypts `text` with a pad supplied by the caller.
///
/// # Errors
///
/// Returns [`CipherError::KeyLengthMismatch`] unless the normalized pad is
/// exactly as long as the normalized text.
pub fn encrypt_with_key(text: &str, key: &str) -> Result<EncryptionResult> {
    apply_pad(text, key, Direction::Encrypt)
}

/// Decrypts `text` with the pad returned at encryption time.
///
/// # Errors
///
/// Returns [`CipherError::KeyLengthMismatch`] unless the normalized pad is
/// exactly as long as the normalized text. Short pads are not repeated.
pub fn decrypt(text: &str, key: &str) -> Result<EncryptionResult> {
    apply_pad(text, key, Direction::Decrypt)
}

fn apply_pad(text: &str, key: &str, direction: Direction) -> Result<EncryptionResult> {
    let text = normalize(text);
    let key = normalize(key);
    if text.len() != key.len() {
        return Err(CipherError::KeyLengthMismatch {
            expected: text.len(),
            actual: key.len(),
        });
    }
    let result = combine(&text, &key, direction);
    Ok(EncryptionResult::new(result, key))
}

fn combine(text: &str, key: &str, direction: Direction) -> String {
    text.chars()
        .zip(key.chars())
        .filter_map(|(t, k)| {
            let t = i64::from(letter_index(t)?);
            let k = i64::from(letter_index(k)?);
            Some(letter_at(t + direction.sign() * k))
        })
        .collect()
}
