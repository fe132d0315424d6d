//! Extpack - browser extension packager.
//!
//! This binary stages an extension source tree (manifest, scripts, icons)
//! into a clean output directory, backfills missing required icons with
//! placeholders, and compresses the result into a distributable ZIP.

mod cli;
mod error;
mod packager;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
