//! x402 facilitator directory generator.
//!
//! Renders the compiled-in (or a JSON) facilitator catalog into a static HTML page and
//! writes it, with its icon assets, into the output directory.
//!
//! Environment:
//! - `.env` values loaded at startup
//! - `DIRECTORY_*` variables override the default paths (see `--help`)
//! - `RUST_LOG` controls log verbosity

use std::process;

use x402_directory::run;

#[tokio::main]
async fn main() {
    let result = run().await;
    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1)
    }
}
