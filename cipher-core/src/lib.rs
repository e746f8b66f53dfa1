// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The main library crate for cipher-core, exposing every classical cipher and the dispatch facade.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! Classical cipher transforms over the 26-letter alphabet: Caesar,
//! monoalphabetic and polyalphabetic substitution, Playfair, Rail Fence,
//! Row-Column transposition, the 2x2 Hill cipher and a letter one-time pad.
//!
//! Every operation is a pure function of its text and key. Input is
//! uppercased and stripped to `A..Z` before transforming, so a round trip
//! returns that normalized form (plus any `X` padding) rather than the raw
//! input. None of these ciphers offers real-world security.
//!
//! ```
//! use cipher_core::{Algorithm, decrypt, encrypt};
//!
//! let sealed = encrypt(Algorithm::Caesar, "Hello", Some("3")).unwrap();
//! assert_eq!(sealed.result, "KHOOR");
//!
//! let opened = decrypt(Algorithm::Caesar, &sealed.result, Some("3")).unwrap();
//! assert_eq!(opened.result, "HELLO");
//! ```

/// Alphabet normalization, modular arithmetic and permutation parsing.
pub mod alphabet;
/// Caesar shift cipher.
pub mod caesar;
/// Routing by algorithm name with per-cipher default keys.
pub mod dispatch;
/// Error type shared by all ciphers.
pub mod error;
/// 2x2 Hill matrix cipher.
pub mod hill;
/// Monoalphabetic substitution.
pub mod monoalphabetic;
/// One-time pad over letters.
pub mod otp;
/// Playfair digraph cipher.
pub mod playfair;
/// Vigenère-style polyalphabetic substitution.
pub mod polyalphabetic;
/// Rail Fence transposition.
pub mod rail_fence;
/// Row-Column transposition.
pub mod row_column;
/// Result value and direction shared by all ciphers.
pub mod transform;

pub use dispatch::{Algorithm, AlgorithmInfo, decrypt, encrypt};
pub use error::{CipherError, Result};
pub use transform::{Direction, EncryptionResult};
