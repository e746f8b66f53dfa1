// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Alphabet normalization, modular arithmetic and permutation helpers shared by all ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Shared alphabet and modular arithmetic helpers.
//!
//! Every cipher works in the index space of the 26 uppercase Latin letters,
//! `A = 0` through `Z = 25`, and reduces all arithmetic modulo 26.

use crate::error::{CipherError, Result};

/// The canonical alphabet, indexed 0-25.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Size of the alphabet.
pub const MODULUS: i64 = 26;

/// Uppercases `text` and drops everything that is not an ASCII letter.
///
/// The result is what every cipher actually transforms, so round trips
/// reproduce this form rather than the raw input.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Returns the canonical index of an uppercase letter, or `None` for anything else.
#[must_use]
pub fn letter_index(c: char) -> Option<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii_uppercase)
        .map(|b| b - b'A')
}

/// Returns the letter for `index` after reducing it mod 26.
#[must_use]
pub fn letter_at(index: i64) -> char {
    // mod26 is always in 0..26
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let slot = mod26(index) as usize;
    char::from(ALPHABET[slot])
}

/// Canonical non-negative residue of `n` modulo 26.
#[must_use]
pub const fn mod26(n: i64) -> i64 {
    n.rem_euclid(MODULUS)
}

/// Multiplicative inverse of `a` modulo 26, found by trying `1..26`.
///
/// Returns `None` when `gcd(a, 26) != 1`.
#[must_use]
pub fn mod_inverse(a: i64) -> Option<i64> {
    let a = mod26(a);
    (1..MODULUS).find(|x| (a * x) % MODULUS == 1)
}

/// True when `seq` holds exactly the values `1..=seq.len()` in some order.
///
/// An empty sequence is not a permutation.
#[must_use]
pub fn is_valid_permutation(seq: &[usize]) -> bool {
    if seq.is_empty() {
        return false;
    }
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();
    sorted.iter().zip(1..).all(|(&value, expected)| value == expected)
}

/// Parses a permutation written as integers separated by whitespace or commas.
///
/// Tokens that are not integers are discarded before validation, so `"3, 1, x, 2"`
/// parses as `[3, 1, 2]`. A token made only of digits (with an optional sign)
/// always counts, even when it is too large to represent.
///
/// # Errors
///
/// Returns [`CipherError::InvalidPermutation`] when the remaining numbers are
/// not exactly `1..=n`.
pub fn parse_permutation(key: &str) -> Result<Vec<usize>> {
    let invalid = || CipherError::InvalidPermutation(key.trim().to_string());
    let numbers = key
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| is_integer_token(token))
        .map(|token| token.parse::<usize>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;

    if is_valid_permutation(&numbers) {
        Ok(numbers)
    } else {
        Err(invalid())
    }
}

fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
