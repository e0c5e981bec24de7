//! Reads a JSON share document from stdin, reconstructs the secret, and
//! reports any corrupted shares.
//!
//! ```sh
//! cargo run --example recover < document.json
//! ```

use std::io::Read;

use ssrec::{parse_share_document, solve};

fn main() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("failed to read stdin");

    let document = match parse_share_document(&input) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("invalid share document: {e}");
            std::process::exit(1);
        }
    };

    match solve(&document.shares, document.threshold) {
        Ok(reconstruction) => {
            println!("Secret: {}", reconstruction.secret);
            if reconstruction.corrupt_ids.is_empty() {
                println!("No corrupt shares detected.");
            } else {
                println!(
                    "Corrupt share ID(s): {}",
                    reconstruction.corrupt_ids.join(", ")
                );
            }
        }
        Err(e) => {
            eprintln!("reconstruction failed: {e}");
            std::process::exit(1);
        }
    }
}
