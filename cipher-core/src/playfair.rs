// File:    playfair.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Playfair digraph substitution over a keyed 5x5 matrix.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Playfair cipher.
//!
//! Letters are enciphered in pairs using a 5x5 grid built from a keyword.
//! `J` has no cell and is always folded into `I`.
//!
//! Encryption splits the text into digraphs, inserting an `X` between two
//! equal letters and padding a lone final letter with `X`. Decryption does not
//! undo the inserted fillers; it only strips one trailing `X`. A plaintext that
//! genuinely ended in `X`, or contained a real `X` between doubled letters,
//! cannot be told apart from the padding.

use std::fmt;

use log::warn;

use crate::alphabet::{ALPHABET, letter_index, normalize};
use crate::error::{CipherError, Result};
use crate::transform::{Direction, EncryptionResult};

/// Keyword used when the caller supplies none.
pub const DEFAULT_KEY: &str = "KEY";

/// Side length of the Playfair grid.
pub const SIZE: usize = 5;

const FILLER: char = 'X';

/// A keyed 5x5 Playfair grid with a letter-to-cell lookup table.
///
/// Built fresh for every call; nothing is cached between operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairMatrix {
    cells: [[char; SIZE]; SIZE],
    positions: [Option<(usize, usize)>; 26],
}

impl PlayfairMatrix {
    /// Builds the grid for `key`.
    ///
    /// The unique letters of the key come first in order of appearance, then
    /// the rest of `A..Z` without `J`, laid out row by row.
    #[must_use]
    pub fn new(key: &str) -> Self {
        let remaining = ALPHABET
            .iter()
            .map(|&b| char::from(b))
            .filter(|&c| c != 'J');
        let mut order = Vec::with_capacity(SIZE * SIZE);
        for c in fold(key).chars().chain(remaining) {
            if !order.contains(&c) {
                order.push(c);
            }
        }

        let mut cells = [[' '; SIZE]; SIZE];
        let mut positions = [None; 26];
        for (slot, &c) in order.iter().enumerate() {
            let (row, col) = (slot / SIZE, slot % SIZE);
            cells[row][col] = c;
            if let Some(index) = letter_index(c) {
                positions[usize::from(index)] = Some((row, col));
            }
        }
        Self { cells, positions }
    }

    /// The grid, row-major.
    #[must_use]
    pub const fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }

    /// Row and column of `letter`, or `None` if it has no cell (`J`, non-letters).
    #[must_use]
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        letter_index(letter).and_then(|index| self.positions[usize::from(index)])
    }

    /// Letter at (`row`, `col`), both wrapping modulo 5.
    #[must_use]
    pub const fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % SIZE][col % SIZE]
    }

    fn transform_pair(&self, a: char, b: char, direction: Direction) -> Result<[char; 2]> {
        let (row_a, col_a) = self.position(a).ok_or(CipherError::InvalidCharacter(a))?;
        let (row_b, col_b) = self.position(b).ok_or(CipherError::InvalidCharacter(b))?;
        // Moving one step back is the same as moving SIZE - 1 steps forward.
        let step = match direction {
            Direction::Encrypt => 1,
            Direction::Decrypt => SIZE - 1,
        };

        let pair = if row_a == row_b {
            [self.at(row_a, col_a + step), self.at(row_b, col_b + step)]
        } else if col_a == col_b {
            [self.at(row_a + step, col_a), self.at(row_b + step, col_b)]
        } else {
            [self.at(row_a, col_b), self.at(row_b, col_a)]
        };
        Ok(pair)
    }

    fn transform(&self, text: &str, direction: Direction) -> Result<String> {
        let letters = text.chars().collect::<Vec<_>>();
        let mut out = String::with_capacity(letters.len());
        for pair in letters.chunks_exact(2) {
            out.extend(self.transform_pair(pair[0], pair[1], direction)?);
        }
        Ok(out)
    }
}

impl fmt::Display for PlayfairMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Uppercase, strip non-letters and fold `J` into `I`.
fn fold(text: &str) -> String {
    normalize(text).replace('J', "I")
}

/// Splits `text` into the digraph stream that encryption consumes.
///
/// A pair of equal letters gets an `X` inserted between them and only the
/// first letter is consumed; a lone final letter is padded with `X`. The
/// result always has even length.
#[must_use]
pub fn prepare_digraphs(text: &str) -> String {
    let letters = fold(text).chars().collect::<Vec<_>>();
    let mut prepared = String::with_capacity(letters.len() + letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        let second = letters.get(i + 1).copied().unwrap_or(FILLER);
        prepared.push(first);
        if first == second {
            prepared.push(FILLER);
            i += 1;
        } else {
            prepared.push(second);
            i += 2;
        }
    }
    prepared
}

/// Encrypts `text` with the grid built from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidCharacter`] if a prepared letter has no cell,
/// which cannot happen after folding.
pub fn encrypt(text: &str, key: &str) -> Result<EncryptionResult> {
    let matrix = PlayfairMatrix::new(key);
    let result = matrix.transform(&prepare_digraphs(text), Direction::Encrypt)?;
    Ok(EncryptionResult::new(result, key))
}

/// Decrypts `text` with the grid built from `key`, dropping one trailing `X`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidCharacter`] if the ciphertext holds a letter
/// with no cell in the grid.
pub fn decrypt(text: &str, key: &str) -> Result<EncryptionResult> {
    let matrix = PlayfairMatrix::new(key);
    let mut text = fold(text);
    if text.len() % 2 != 0 {
        text.push(FILLER);
    }
    if let Some(bad) = text.chars().find(|&c| matrix.position(c).is_none()) {
        warn!("Playfair ciphertext contains '{bad}', which has no cell in the matrix");
        return Err(CipherError::InvalidCharacter(bad));
    }

    let mut result = matrix.transform(&text, Direction::Decrypt)?;
    if result.ends_with(FILLER) {
        result.pop();
    }
    Ok(EncryptionResult::new(result, key))
}
