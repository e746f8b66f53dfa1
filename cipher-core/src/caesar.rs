// File:    caesar.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Caesar shift cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Caesar cipher: every letter moves `shift` places along the alphabet.

use crate::alphabet::{MODULUS, letter_at, letter_index, mod26, normalize};
use crate::transform::EncryptionResult;

/// Shift used when the caller supplies none.
pub const DEFAULT_SHIFT: i64 = 3;

/// Encrypts `text` by rotating each letter forward by `shift`.
///
/// The shift is not range checked; any integer gives a well-defined rotation.
#[must_use]
pub fn encrypt(text: &str, shift: i64) -> EncryptionResult {
    EncryptionResult::new(rotate(text, shift), shift.to_string())
}

/// Decrypts `text` by rotating each letter forward by `26 - shift`.
#[must_use]
pub fn decrypt(text: &str, shift: i64) -> EncryptionResult {
    EncryptionResult::new(rotate(text, MODULUS - mod26(shift)), shift.to_string())
}

fn rotate(text: &str, shift: i64) -> String {
    let shift = mod26(shift);
    normalize(text)
        .chars()
        .filter_map(letter_index)
        .map(|index| letter_at(i64::from(index) + shift))
        .collect()
}
