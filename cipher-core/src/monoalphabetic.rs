// File:    monoalphabetic.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Monoalphabetic substitution with a 26-letter key.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Monoalphabetic substitution.
//!
//! The key lists the cipher letter for each plain letter in alphabet order:
//! the letter at position `i` of the key replaces the `i`-th letter of `A..Z`.
//! Letters the key does not cover pass through unchanged.

use crate::alphabet::{ALPHABET, letter_index, normalize};
use crate::transform::EncryptionResult;

/// QWERTY keyboard order, used when the caller supplies no key.
pub const DEFAULT_KEY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

/// Replaces each letter of `text` with the key letter at its alphabet position.
#[must_use]
pub fn encrypt(text: &str, key: &str) -> EncryptionResult {
    let key = normalize(key);
    let table = key.as_bytes();
    let result = normalize(text)
        .chars()
        .map(|c| {
            letter_index(c)
                .and_then(|index| table.get(usize::from(index)))
                .map_or(c, |&b| char::from(b))
        })
        .collect::<String>();
    EncryptionResult::new(result, key)
}

/// Replaces each letter of `text` with the alphabet letter at its key position.
#[must_use]
pub fn decrypt(text: &str, key: &str) -> EncryptionResult {
    let key = normalize(key);
    let result = normalize(text)
        .chars()
        .map(|c| {
            key.find(c)
                .and_then(|position| ALPHABET.get(position))
                .map_or(c, |&b| char::from(b))
        })
        .collect::<String>();
    EncryptionResult::new(result, key)
}
