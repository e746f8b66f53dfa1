// File:    render.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Plain-text rendering of results, the algorithm catalogue and the rail fence layout.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use cipher_core::alphabet::{normalize, parse_permutation};
use cipher_core::rail_fence::{MIN_RAILS, zigzag_pattern};
use cipher_core::row_column;
use cipher_core::{Algorithm, Direction, EncryptionResult};
use std::fmt::Write;

/// Result on the first line, plus the generated pad for a one-time pad encryption.
pub(super) fn plain(direction: Direction, algorithm: Algorithm, outcome: &EncryptionResult) -> String {
    match (&outcome.key, direction, algorithm) {
        (Some(key), Direction::Encrypt, Algorithm::Otp) => {
            format!("{}\nKey: {key}", outcome.result)
        }
        _ => outcome.result.clone(),
    }
}

/// One row per algorithm.
pub(super) fn catalogue() -> String {
    let mut out = format!(
        "{:<16} {:<26} {:<10} {}\n",
        "ID", "Name", "Needs Key", "Description"
    );
    let _ = writeln!(out, "{:-<80}", "");
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        let needs_key = if info.needs_key { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "{:<16} {:<26} {:<10} {}",
            info.id, info.name, needs_key, info.description
        );
    }
    out
}

/// The zigzag drawn one rail per line, `.` marking empty cells.
pub(super) fn fence(text: &str, rails: usize) -> String {
    let letters = normalize(text).chars().collect::<Vec<_>>();
    let pattern = zigzag_pattern(letters.len(), rails);
    let mut out = String::new();
    for rail in 0..rails.max(MIN_RAILS).min(letters.len().max(1)) {
        let line = letters
            .iter()
            .zip(&pattern)
            .map(|(&c, &r)| if r == rail { c } else { '.' })
            .collect::<String>();
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Key numbers over the padded grid, one letter per cell.
pub(super) fn grid(text: &str, key: &str) -> cipher_core::Result<String> {
    let permutation = parse_permutation(key)?;
    let rows = row_column::grid(text, key)?;
    let header = permutation
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let mut out = format!("{header}\n{:-<width$}\n", "", width = header.len());
    for row in rows {
        let line = row.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
        let _ = writeln!(out, "{line}");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_shows_generated_pad_only_for_otp_encrypt() {
        let outcome = EncryptionResult::new("EQNVZ", "XMCKL");
        assert_eq!(
            plain(Direction::Encrypt, Algorithm::Otp, &outcome),
            "EQNVZ\nKey: XMCKL"
        );
        assert_eq!(plain(Direction::Decrypt, Algorithm::Otp, &outcome), "EQNVZ");
        assert_eq!(plain(Direction::Encrypt, Algorithm::Caesar, &outcome), "EQNVZ");
    }

    #[test]
    fn test_fence_layout() {
        assert_eq!(fence("WEAREDIS", 3), "W...E...\n.E.R.D.S\n..A...I.\n");
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(
            grid("SECRETMESSAGE", "3 1 2").unwrap(),
            "3 1 2\n-----\nS E C\nR E T\nM E S\nS A G\nE X X\n"
        );
        assert!(grid("SECRET", "1 1 2").is_err());
    }

    #[test]
    fn test_catalogue_lists_every_algorithm() {
        let listing = catalogue();
        for algorithm in Algorithm::ALL {
            assert!(listing.contains(algorithm.id()));
        }
    }
}
