// File:    rail_fence.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Rail Fence zigzag transposition.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Rail Fence transposition.
//!
//! Letters are written in a zigzag across `rails` rows and read off row by
//! row. Fewer than two rails is clamped to two.

use log::warn;

use crate::alphabet::normalize;
use crate::transform::EncryptionResult;

/// Rail count used when the caller supplies none.
pub const DEFAULT_RAILS: usize = 3;

/// Smallest rail count that produces a zigzag.
pub const MIN_RAILS: usize = 2;

/// Rail index of each of the first `len` positions of the zigzag.
///
/// The pointer starts on rail 0, moves down one rail per letter and bounces
/// off the top and bottom rails without dwelling.
#[must_use]
pub fn zigzag_pattern(len: usize, rails: usize) -> Vec<usize> {
    let bottom = rails.max(MIN_RAILS) - 1;
    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0;
    let mut descending = true;
    for _ in 0..len {
        pattern.push(rail);
        if rail == 0 {
            descending = true;
        } else if rail == bottom {
            descending = false;
        }
        if descending {
            rail += 1;
        } else {
            rail -= 1;
        }
    }
    pattern
}

fn clamp_rails(rails: usize) -> usize {
    if rails < MIN_RAILS {
        warn!("Rail count {rails} is below {MIN_RAILS}; using {MIN_RAILS}");
    }
    rails.max(MIN_RAILS)
}

/// Number of rails the pattern actually touches.
fn rails_in_use(pattern: &[usize]) -> usize {
    pattern.iter().max().map_or(0, |&deepest| deepest + 1)
}

/// Writes `text` along the zigzag and concatenates the rails top to bottom.
#[must_use]
pub fn encrypt(text: &str, rails: usize) -> EncryptionResult {
    let rails = clamp_rails(rails);
    let letters = normalize(text).chars().collect::<Vec<_>>();
    let pattern = zigzag_pattern(letters.len(), rails);

    let mut fence = vec![String::new(); rails_in_use(&pattern)];
    for (&c, &rail) in letters.iter().zip(&pattern) {
        fence[rail].push(c);
    }
    EncryptionResult::new(fence.concat(), rails.to_string())
}

/// Splits `text` into per-rail runs and reads them back along the zigzag.
#[must_use]
pub fn decrypt(text: &str, rails: usize) -> EncryptionResult {
    let rails = clamp_rails(rails);
    let letters = normalize(text).chars().collect::<Vec<_>>();
    let pattern = zigzag_pattern(letters.len(), rails);

    let mut counts = vec![0usize; rails_in_use(&pattern)];
    for &rail in &pattern {
        counts[rail] += 1;
    }

    let mut runs = Vec::with_capacity(counts.len());
    let mut rest = letters.as_slice();
    for &count in &counts {
        let (run, tail) = rest.split_at(count);
        runs.push(run.iter());
        rest = tail;
    }

    let result = pattern
        .iter()
        .filter_map(|&rail| runs[rail].next().copied())
        .collect::<String>();
    EncryptionResult::new(result, rails.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_pattern_bounces() {
        assert_eq!(zigzag_pattern(8, 3), vec![0, 1, 2, 1, 0, 1, 2, 1]);
        assert_eq!(zigzag_pattern(5, 2), vec![0, 1, 0, 1, 0]);
        assert_eq!(zigzag_pattern(0, 4), Vec::<usize>::new());
    }

    #[test]
    fn test_zigzag_pattern_clamps_single_rail() {
        assert_eq!(zigzag_pattern(4, 1), zigzag_pattern(4, 2));
        assert_eq!(zigzag_pattern(4, 0), vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_more_rails_than_letters() {
        assert_eq!(zigzag_pattern(3, 10), vec![0, 1, 2]);
        let encrypted = encrypt("ABC", 10);
        assert_eq!(encrypted.result, "ABC");
        assert_eq!(encrypted.key.as_deref(), Some("10"));
        assert_eq!(decrypt("ABC", 10).result, "ABC");
    }
}
