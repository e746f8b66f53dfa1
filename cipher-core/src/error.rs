// File:    error.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Error type shared by every cipher and by the dispatch facade.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Errors produced while validating keys or transforming text.
//!
//! Nothing in this crate panics on bad input. Every failure is reported as a
//! [`CipherError`] so an interactive caller can render it and carry on.

use thiserror::Error;

use crate::dispatch::Algorithm;

/// Result type alias for cipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Core error type for cipher operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The key text could not be interpreted for the selected cipher.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A Row-Column key that is not a permutation of `1..=n`.
    #[error("Invalid permutation '{0}'. Use numbers 1 to n separated by spaces or commas.")]
    InvalidPermutation(String),

    /// Playfair ciphertext contained a letter that has no cell in the matrix.
    #[error("Invalid character in ciphertext: '{0}'. Playfair matrix uses I instead of J.")]
    InvalidCharacter(char),

    /// Hill key whose determinant has no inverse modulo 26.
    #[error("Key matrix is not invertible mod 26 (determinant {determinant})")]
    NonInvertibleKey {
        /// Determinant of the key matrix, reduced mod 26.
        determinant: i64,
    },

    /// One-time pad whose length differs from the text it is applied to.
    #[error("Key length {actual} does not match text length {expected}")]
    KeyLengthMismatch {
        /// Number of letters in the normalized text.
        expected: usize,
        /// Number of letters in the normalized key.
        actual: usize,
    },

    /// The cipher cannot run without a caller-supplied key.
    #[error("{0} requires a key to decrypt")]
    MissingKey(Algorithm),

    /// Algorithm name outside the supported set.
    #[error(
        "Unknown algorithm '{0}'. Expected one of: playfair, railfence, monoalphabetic, polyalphabetic, hill, otp, caesar, rowcolumn"
    )]
    UnknownAlgorithm(String),
}
