// File:    polyalphabetic.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Vigenere-style polyalphabetic substitution with a repeating keyword.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Polyalphabetic (Vigenère-style) substitution.
//!
//! Letter `i` of the text is shifted by the alphabet index of keyword letter
//! `i mod len(keyword)`.

use crate::alphabet::{letter_at, letter_index, normalize};
use crate::error::{CipherError, Result};
use crate::transform::{Direction, EncryptionResult};

/// Keyword used when the caller supplies none.
pub const DEFAULT_KEY: &str = "KEY";

/// Encrypts `text` by adding the repeating keyword.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the keyword has no letters.
pub fn encrypt(text: &str, key: &str) -> Result<EncryptionResult> {
    shift_by_keyword(text, key, Direction::Encrypt)
}

/// Decrypts `text` by subtracting the repeating keyword.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the keyword has no letters.
pub fn decrypt(text: &str, key: &str) -> Result<EncryptionResult> {
    shift_by_keyword(text, key, Direction::Decrypt)
}

fn shift_by_keyword(text: &str, key: &str, direction: Direction) -> Result<EncryptionResult> {
    let key = normalize(key);
    let shifts = key
        .chars()
        .filter_map(letter_index)
        .map(i64::from)
        .collect::<Vec<_>>();
    if shifts.is_empty() {
        return Err(CipherError::InvalidKey(
            "polyalphabetic keyword must contain at least one letter".to_string(),
        ));
    }

    let result = normalize(text)
        .chars()
        .filter_map(letter_index)
        .zip(shifts.iter().cycle())
        .map(|(index, &shift)| letter_at(i64::from(index) + direction.sign() * shift))
        .collect::<String>();
    Ok(EncryptionResult::new(result, key))
}
