//! CLI entry and session loop
//!
//! Startup sequence:
//! 1. Parse arguments
//! 2. Load configuration (file, then flag overrides)
//! 3. Set the log threshold
//! 4. Create the record store and enter the menu loop
//!
//! The store lives for exactly one session and is released on exit.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::roster::RecordStore;

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::io::{clear_screen, ConsoleInput, InputProvider};
use super::menu::{dispatch, read_choice, render_menu, Flow, MenuChoice};

const PROMPT_PAUSE: &str = "Press Enter to continue...";
const FAREWELL: &str = "Thank you for using my program! <3";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Minimum log severity (optional, default "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Clear the screen between menu screens (optional, default true)
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Wait for Enter after each command (optional, default true)
    #[serde(default = "default_true")]
    pub pause_after_command: bool,
}

fn default_log_level() -> String {
    "error".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            clear_screen: true,
            pause_after_command: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Build the effective configuration for a command line
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(level) = &cli.log_level {
            config.log_level = level.clone();
        }
        if cli.no_clear {
            config.clear_screen = false;
        }
        if cli.no_pause {
            config.pause_after_command = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.severity().map(|_| ())
    }

    /// Parsed log threshold
    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }
}

/// Main CLI entry point
///
/// Parses arguments and runs one interactive session.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(&cli)?;
    Logger::set_threshold(config.severity()?);

    if let Some(path) = &cli.config {
        log_event_with_fields(Event::ConfigLoaded, &[("path", &path.display().to_string())]);
    }

    let mut input = ConsoleInput::new();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    run_session(&config, &mut input, &mut stdout, &mut stderr)
}

/// Run one menu session against a fresh store.
///
/// Running out of input ends the session the same way as choosing Exit.
pub fn run_session<I, W, E>(
    config: &Config,
    input: &mut I,
    out: &mut W,
    err: &mut E,
) -> CliResult<()>
where
    I: InputProvider + ?Sized,
    W: Write,
    E: Write,
{
    let session_id = Uuid::new_v4().to_string();
    log_event_with_fields(Event::SessionStart, &[("session_id", &session_id)]);

    let mut store = RecordStore::new();
    let result = match run_menu(config, &mut store, input, out, err) {
        Err(e) if e.is_input_closed() => {
            writeln!(out)?;
            Ok(())
        }
        other => other,
    };

    if result.is_ok() {
        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
    }

    let released = store.destroy();
    log_event_with_fields(
        Event::SessionEnd,
        &[
            ("records_released", &released.to_string()),
            ("session_id", &session_id),
        ],
    );

    result
}

/// Menu loop: render, read a choice, dispatch, pause.
pub fn run_menu<I, W, E>(
    config: &Config,
    store: &mut RecordStore,
    input: &mut I,
    out: &mut W,
    err: &mut E,
) -> CliResult<()>
where
    I: InputProvider + ?Sized,
    W: Write,
    E: Write,
{
    loop {
        if config.clear_screen {
            clear_screen(out)?;
        }
        render_menu(out)?;

        let choice = read_choice(input)?;
        if choice != MenuChoice::Exit && config.clear_screen {
            clear_screen(out)?;
        }

        if dispatch(choice, store, input, out, err)? == Flow::Exit {
            return Ok(());
        }

        if config.pause_after_command {
            input.read_line(PROMPT_PAUSE)?;
        }
    }
}
