//! Console input handling
//!
//! The menu never touches stdin directly. It asks an `InputProvider` for
//! lines, which lets tests drive it with `ScriptedInput`.
//!
//! - Lines are read whole, with no length limit
//! - Trailing `\r\n` / `\n` is stripped
//! - Bytes that are not UTF-8 are replaced, never rejected
//! - End of input surfaces as `CliErrorCode::InputClosed`

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::observability::{log_event_with_fields, Event};

use super::errors::{CliError, CliResult};

/// ANSI clear-screen and cursor-home sequence
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Source of user input lines
pub trait InputProvider {
    /// Show `prompt` and return the next line without its line terminator
    fn read_line(&mut self, prompt: &str) -> CliResult<String>;
}

/// Reads from stdin, prompting on stdout
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputProvider for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> CliResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        read_lossy_line(&mut io::stdin().lock())?.ok_or_else(CliError::input_closed)
    }
}

/// Read one line of raw bytes. Invalid UTF-8 is replaced with U+FFFD.
///
/// Returns `None` at end of input.
pub fn read_lossy_line<R: BufRead + ?Sized>(reader: &mut R) -> CliResult<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(strip_line_ending(
        String::from_utf8_lossy(&buf).into_owned(),
    )))
}

/// Replays a fixed list of lines and records every prompt shown
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> CliResult<String> {
        self.prompts.push(prompt.to_string());
        self.lines
            .pop_front()
            .map(strip_line_ending)
            .ok_or_else(CliError::input_closed)
    }
}

fn strip_line_ending(mut line: String) -> String {
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    line
}

/// Prompt until the line parses as an integer.
pub fn read_int<I: InputProvider + ?Sized>(input: &mut I, prompt: &str) -> CliResult<i64> {
    loop {
        let line = input.read_line(prompt)?;
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => log_event_with_fields(Event::InputRejected, &[("input", line.trim())]),
        }
    }
}

/// Prompt until the integer satisfies `accept`.
pub fn read_int_where<I, F>(input: &mut I, prompt: &str, mut accept: F) -> CliResult<i64>
where
    I: InputProvider + ?Sized,
    F: FnMut(i64) -> bool,
{
    loop {
        let value = read_int(input, prompt)?;
        if accept(value) {
            return Ok(value);
        }
        log_event_with_fields(Event::InputRejected, &[("input", &value.to_string())]);
    }
}

/// Clear the terminal
pub fn clear_screen<W: Write>(out: &mut W) -> CliResult<()> {
    write!(out, "{}", CLEAR_SCREEN)?;
    out.flush()?;
    Ok(())
}
