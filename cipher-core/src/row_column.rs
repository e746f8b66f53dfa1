// File:    row_column.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Row-Column (columnar) transposition keyed by a numeric permutation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Row-Column transposition.
//!
//! The text is written row by row into a grid with one column per key entry,
//! padded with `X`, and read out column by column. Column `v` of the read-out
//! order is the grid column whose key entry is `v`.

use crate::alphabet::{normalize, parse_permutation};
use crate::error::Result;
use crate::transform::EncryptionResult;

/// Identity permutation of six columns, used when the caller supplies no key.
pub const DEFAULT_KEY: &str = "1 2 3 4 5 6";

const FILLER: char = 'X';

/// Grid column indices in the order they are read out.
fn read_order(permutation: &[usize]) -> Vec<usize> {
    (1..=permutation.len())
        .filter_map(|value| permutation.iter().position(|&p| p == value))
        .collect()
}

/// Normalized `text` padded with `X` and cut into rows of `cols` letters.
fn layout(text: &str, cols: usize) -> Vec<Vec<char>> {
    let mut letters = normalize(text).chars().collect::<Vec<_>>();
    let rows = letters.len().div_ceil(cols);
    letters.resize(rows * cols, FILLER);
    letters.chunks_exact(cols).map(<[char]>::to_vec).collect()
}

/// The padded grid that encryption reads from, one entry per row.
///
/// # Errors
///
/// Returns [`crate::CipherError::InvalidPermutation`] if `key` is not a
/// permutation of `1..=n`.
pub fn grid(text: &str, key: &str) -> Result<Vec<Vec<char>>> {
    let permutation = parse_permutation(key)?;
    Ok(layout(text, permutation.len()))
}

/// Encrypts `text` with the permutation in `key`.
///
/// # Errors
///
/// Returns [`crate::CipherError::InvalidPermutation`] if `key` is not a
/// permutation of `1..=n`.
pub fn encrypt(text: &str, key: &str) -> Result<EncryptionResult> {
    let permutation = parse_permutation(key)?;
    let rows = layout(text, permutation.len());

    let rows = &rows;
    let result = read_order(&permutation)
        .into_iter()
        .flat_map(|col| rows.iter().map(move |row| row[col]))
        .collect::<String>();
    Ok(EncryptionResult::new(result, key))
}

/// Decrypts `text` with the permutation in `key`.
///
/// Ciphertext that does not fill the grid leaves the trailing cells of the
/// last-read columns empty.
///
/// # Errors
///
/// Returns [`crate::CipherError::InvalidPermutation`] if `key` is not a
/// permutation of `1..=n`.
pub fn decrypt(text: &str, key: &str) -> Result<EncryptionResult> {
    let permutation = parse_permutation(key)?;
    let cols = permutation.len();
    let letters = normalize(text);
    let rows = letters.len().div_ceil(cols);

    let mut grid = vec![None; rows * cols];
    let mut source = letters.chars();
    for col in read_order(&permutation) {
        for row in 0..rows {
            if let Some(c) = source.next() {
                grid[row * cols + col] = Some(c);
            }
        }
    }

    let result = grid.into_iter().flatten().collect::<String>();
    Ok(EncryptionResult::new(result, key))
}
