// File:    main.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Command-line front end that routes text through the classical ciphers in cipher-core.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

#![deny(missing_docs)]
//! A command-line interface for the classical cipher library.

use cipher_core::playfair::{self, PlayfairMatrix};
use cipher_core::{rail_fence, row_column};
use cipher_core::{Algorithm, Direction, dispatch};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

mod render;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Caesar shift by 3\ncipher-cli encrypt -a caesar -k 3 \"Hello\"\n\n# One-time pad; keep the printed key\ncipher-cli encrypt -a otp \"attack at dawn\"\n\n# Decrypt a file with a columnar key\ncipher-cli decrypt -a rowcolumn -k \"3 1 2\" --input ./secret.txt\n\n# Show the Playfair grid for a keyword\ncipher-cli matrix -k PLAYFAIR\n\n# Show the columnar transposition grid\ncipher-cli grid \"SECRETMESSAGE\" -k \"3 1 2\""
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    Encrypt(TransformArgs),
    /// Decrypt text with a classical cipher
    Decrypt(TransformArgs),
    /// List the supported algorithms
    List {
        /// Print the catalogue as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the Playfair matrix for a keyword
    Matrix {
        /// The Playfair keyword
        #[arg(short, long, default_value = playfair::DEFAULT_KEY)]
        key: String,
    },
    /// Print the Row-Column transposition grid for a text
    Grid {
        /// The text to lay out
        text: String,

        /// The column permutation, e.g. "3 1 2"
        #[arg(short, long, default_value = row_column::DEFAULT_KEY)]
        key: String,
    },
    /// Print the Rail Fence zigzag for a text
    Fence {
        /// The text to lay out
        text: String,

        /// The number of rails
        #[arg(short, long, default_value_t = rail_fence::DEFAULT_RAILS)]
        rails: usize,
    },
}

#[derive(Args)]
struct TransformArgs {
    /// The text to transform. If omitted, reads --input or standard input.
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// The cipher to use
    #[arg(short, long, env = "CIPHER_ALGORITHM", value_name = "ALGORITHM")]
    algorithm: Algorithm,

    /// The cipher key. Each cipher falls back to its default key when omitted.
    #[arg(short, long, env = "CIPHER_KEY", value_name = "KEY")]
    key: Option<String>,

    /// Path to a file holding the text to transform
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Path to write the result to instead of standard output
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Print the full result, including the key, as JSON
    #[arg(long)]
    json: bool,
}

fn read_text(args: &TransformArgs) -> io::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return fs::read_to_string(path);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run_transform(direction: Direction, args: &TransformArgs) {
    let text = read_text(args).unwrap_or_else(|e| {
        error!("Failed to read input text: {e}");
        std::process::exit(1);
    });

    let outcome = dispatch::apply(direction, args.algorithm, &text, args.key.as_deref())
        .unwrap_or_else(|e| {
            error!("{e}");
            std::process::exit(1);
        });
    info!(
        "{direction:?} with {} produced {} letters.",
        args.algorithm,
        outcome.result.len()
    );

    let rendered = if args.json {
        serde_json::to_string_pretty(&outcome).unwrap_or_else(|e| {
            error!("Failed to serialize result: {e}");
            std::process::exit(1);
        })
    } else {
        render::plain(direction, args.algorithm, &outcome)
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                error!("Failed to write output file '{}': {e}", path.display());
                std::process::exit(1);
            }
            info!("Result written to '{}'", path.display());
        }
        None => println!("{rendered}"),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encrypt(args) => run_transform(Direction::Encrypt, args),
        Commands::Decrypt(args) => run_transform(Direction::Decrypt, args),
        Commands::List { json: false } => print!("{}", render::catalogue()),
        Commands::List { json: true } => {
            let infos = Algorithm::ALL.map(Algorithm::info);
            match serde_json::to_string_pretty(&infos) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => {
                    error!("Failed to serialize catalogue: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Grid { text, key } => match render::grid(text, key) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        Commands::Matrix { key } => println!("{}", PlayfairMatrix::new(key)),
        Commands::Fence { text, rails } => print!("{}", render::fence(text, *rails)),
    }
}
