// File:    dispatch.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Routes an algorithm name and optional key string to the matching cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The dispatch facade.
//!
//! Callers that hold an algorithm name and a raw key string (a form field, a
//! command-line flag) go through [`encrypt`] and [`decrypt`] here. Absent or
//! blank keys fall back to each cipher's default.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::{CipherError, Result};
use crate::hill::{self, HillKey};
use crate::transform::{Direction, EncryptionResult};
use crate::{caesar, monoalphabetic, otp, playfair, polyalphabetic, rail_fence, row_column};

/// The closed set of supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Playfair digraph substitution.
    Playfair,
    /// Rail Fence zigzag transposition.
    RailFence,
    /// Monoalphabetic substitution.
    Monoalphabetic,
    /// Polyalphabetic (Vigenère-style) substitution.
    Polyalphabetic,
    /// 2x2 Hill matrix cipher.
    Hill,
    /// One-time pad.
    Otp,
    /// Caesar shift.
    Caesar,
    /// Row-Column transposition.
    RowColumn,
}

/// Catalogue entry describing an algorithm to a user.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Identifier accepted by [`Algorithm::from_str`].
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Whether the user is expected to provide a key.
    pub needs_key: bool,
}

impl Algorithm {
    /// Every algorithm, in catalogue order.
    pub const ALL: [Self; 8] = [
        Self::Playfair,
        Self::RailFence,
        Self::Monoalphabetic,
        Self::Polyalphabetic,
        Self::Hill,
        Self::Otp,
        Self::Caesar,
        Self::RowColumn,
    ];

    /// Lowercase identifier, e.g. `"railfence"`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Playfair => "playfair",
            Self::RailFence => "railfence",
            Self::Monoalphabetic => "monoalphabetic",
            Self::Polyalphabetic => "polyalphabetic",
            Self::Hill => "hill",
            Self::Otp => "otp",
            Self::Caesar => "caesar",
            Self::RowColumn => "rowcolumn",
        }
    }

    /// Catalogue entry for this algorithm.
    #[must_use]
    pub const fn info(self) -> AlgorithmInfo {
        let (name, description, needs_key) = match self {
            Self::Playfair => ("Playfair Cipher", "5x5 grid substitution using keyword", true),
            Self::RailFence => ("Rail Fence Cipher", "Zigzag transposition cipher", true),
            Self::Monoalphabetic => ("Monoalphabetic Cipher", "Single substitution mapping", true),
            Self::Polyalphabetic => (
                "Polyalphabetic Cipher",
                "Multiple substitution mappings",
                true,
            ),
            Self::Hill => ("Hill Cipher", "Matrix-based encryption", false),
            Self::Otp => ("One-Time Pad", "Theoretically unbreakable cipher", false),
            Self::Caesar => ("Caesar Cipher", "Letter shifting substitution", true),
            Self::RowColumn => (
                "Row Column Transposition",
                "Column-based rearrangement",
                true,
            ),
        };
        AlgorithmInfo {
            id: self.id(),
            name,
            description,
            needs_key,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    /// Case-insensitive; `-`, `_` and spaces are ignored, so `"Rail-Fence"` works.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == wanted)
            .ok_or_else(|| CipherError::UnknownAlgorithm(s.to_string()))
    }
}

fn parse_integer(key: &str, what: &str) -> Result<i64> {
    key.parse::<i64>()
        .map_err(|_| CipherError::InvalidKey(format!("{what} must be an integer, got '{key}'")))
}

/// Runs `algorithm` in `direction` over `text`.
///
/// # Errors
///
/// Propagates the selected cipher's key validation errors, and returns
/// [`CipherError::MissingKey`] for a one-time pad decrypt without a key.
pub fn apply(
    direction: Direction,
    algorithm: Algorithm,
    text: &str,
    key: Option<&str>,
) -> Result<EncryptionResult> {
    let key = key.map(str::trim).filter(|k| !k.is_empty());
    debug!(
        "{direction:?} {} bytes with {algorithm} ({})",
        text.len(),
        if key.is_some() { "caller key" } else { "default key" }
    );

    match algorithm {
        Algorithm::Caesar => {
            let shift = key
                .map(|k| parse_integer(k, "Caesar shift"))
                .transpose()?
                .unwrap_or(caesar::DEFAULT_SHIFT);
            Ok(match direction {
                Direction::Encrypt => caesar::encrypt(text, shift),
                Direction::Decrypt => caesar::decrypt(text, shift),
            })
        }
        Algorithm::Monoalphabetic => {
            let key = key.unwrap_or(monoalphabetic::DEFAULT_KEY);
            Ok(match direction {
                Direction::Encrypt => monoalphabetic::encrypt(text, key),
                Direction::Decrypt => monoalphabetic::decrypt(text, key),
            })
        }
        Algorithm::Polyalphabetic => {
            let key = key.unwrap_or(polyalphabetic::DEFAULT_KEY);
            match direction {
                Direction::Encrypt => polyalphabetic::encrypt(text, key),
                Direction::Decrypt => polyalphabetic::decrypt(text, key),
            }
        }
        Algorithm::Playfair => {
            let key = key.unwrap_or(playfair::DEFAULT_KEY);
            match direction {
                Direction::Encrypt => playfair::encrypt(text, key),
                Direction::Decrypt => playfair::decrypt(text, key),
            }
        }
        Algorithm::RailFence => {
            let rails = match key {
                // Negative counts clamp to the minimum like any other count below two.
                Some(k) => usize::try_from(parse_integer(k, "Rail count")?).unwrap_or(0),
                None => rail_fence::DEFAULT_RAILS,
            };
            Ok(match direction {
                Direction::Encrypt => rail_fence::encrypt(text, rails),
                Direction::Decrypt => rail_fence::decrypt(text, rails),
            })
        }
        Algorithm::Hill => {
            let key = key.map_or(Ok(hill::DEFAULT_KEY), HillKey::from_json)?;
            match direction {
                Direction::Encrypt => hill::encrypt(text, &key),
                Direction::Decrypt => hill::decrypt(text, &key),
            }
        }
        Algorithm::Otp => match (direction, key) {
            (Direction::Encrypt, None) => Ok(otp::encrypt(text)),
            (Direction::Encrypt, Some(key)) => otp::encrypt_with_key(text, key),
            (Direction::Decrypt, Some(key)) => otp::decrypt(text, key),
            (Direction::Decrypt, None) => Err(CipherError::MissingKey(Algorithm::Otp)),
        },
        Algorithm::RowColumn => {
            let key = key.unwrap_or(row_column::DEFAULT_KEY);
            match direction {
                Direction::Encrypt => row_column::encrypt(text, key),
                Direction::Decrypt => row_column::decrypt(text, key),
            }
        }
    }
}

/// Encrypts `text` with `algorithm`, using its default key when `key` is absent or blank.
///
/// # Errors
///
/// See [`apply`].
pub fn encrypt(algorithm: Algorithm, text: &str, key: Option<&str>) -> Result<EncryptionResult> {
    apply(Direction::Encrypt, algorithm, text, key)
}

/// Decrypts `text` with `algorithm`, using its default key when `key` is absent or blank.
///
/// # Errors
///
/// See [`apply`].
pub fn decrypt(algorithm: Algorithm, text: &str, key: Option<&str>) -> Result<EncryptionResult> {
    apply(Direction::Decrypt, algorithm, text, key)
}

/// Like [`encrypt`], with the algorithm given by name.
///
/// # Errors
///
/// Returns [`CipherError::UnknownAlgorithm`] for a name outside the supported set.
pub fn encrypt_named(name: &str, text: &str, key: Option<&str>) -> Result<EncryptionResult> {
    encrypt(name.parse()?, text, key)
}

/// Like [`decrypt`], with the algorithm given by name.
///
/// # Errors
///
/// Returns [`CipherError::UnknownAlgorithm`] for a name outside the supported set.
pub fn decrypt_named(name: &str, text: &str, key: Option<&str>) -> Result<EncryptionResult> {
    decrypt(name.parse()?, text, key)
}
