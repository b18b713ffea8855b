//! CLI argument definitions using clap
//!
//! rosterdb [--config <path>] [--log-level <level>] [--no-clear] [--no-pause]

use clap::Parser;
use std::path::PathBuf;

/// rosterdb - an in-memory Teacher record store with a console menu
#[derive(Parser, Debug, Default)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum log severity written to stderr (trace, info, warn, error, fatal)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Do not clear the screen between menu screens
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for Enter after each command
    #[arg(long)]
    pub no_pause: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
