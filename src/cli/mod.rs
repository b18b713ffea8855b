//! CLI module for rosterdb
//!
//! Provides the console surface around the record store:
//! - argument parsing and JSON configuration
//! - the input provider abstraction over stdin
//! - the menu loop and per-command dispatch

mod args;
mod commands;
mod errors;
pub mod io;
pub mod menu;

pub use args::Cli;
pub use commands::{run, run_menu, run_session, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{ConsoleInput, InputProvider, ScriptedInput};
pub use menu::{dispatch, Flow, MenuChoice};
