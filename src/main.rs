//! rosterdb CLI entry point
//!
//! All logic is delegated to the CLI module. main.rs only:
//! 1. Calls cli::run
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure

use rosterdb::cli;
use rosterdb::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::error("SESSION_FAILED", &[("code", e.code_str())]);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
