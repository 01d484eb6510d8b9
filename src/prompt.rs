//! Interactive prompts — read, validate, loop.
//!
//! # Design goals
//!
//! - **Testable without a terminal.**  Everything that talks to the user goes
//!   through the [`Console`] trait: one method to ask for a line, one to print
//!   a line.  Tests drive the prompts with a scripted console and capture the
//!   output without touching a real tty.
//! - **Cancellation is a value, not an exit.**  Ctrl-C at an attended
//!   terminal (surfaced by `console` as [`io::ErrorKind::Interrupted`]) and
//!   EOF on piped input both become [`PromptError::Cancelled`], which callers
//!   propagate with `?` up to the top-level run function.  The farewell
//!   message and the process exit status are decided there, not here.
//!
//! # Prompt variants
//!
//! | Function          | Accepts                                         |
//! |-------------------|-------------------------------------------------|
//! | [`existing_file`] | paths that exist and are regular files          |
//! | [`destination`]   | anything except an existing non-directory       |
//! | [`confirm`]       | exactly `Y` or `N` (case-sensitive)             |
//!
//! Every rejected answer prints an error line and re-asks.

use std::io::{self, BufRead};
use std::path::PathBuf;

use console::Term;
use thiserror::Error;

use crate::{paths, ui};

// ─── Console abstraction ──────────────────────────────────────────────────────

/// One answer from the user.
#[derive(Debug)]
pub enum Answer {
    /// A line of input, without the trailing newline.
    Line(String),
    /// The user cancelled the prompt (Ctrl-C or end of input).
    Cancelled,
}

/// The user-facing console: ask for input, print output.
///
/// The production implementation is [`TermConsole`]; tests substitute a
/// scripted one.
pub trait Console {
    /// Print `message` (no trailing newline) and read one line of input.
    fn ask(&mut self, message: &str) -> io::Result<Answer>;

    /// Print one full line to the user.
    fn say(&mut self, line: &str);
}

/// [`Console`] backed by the process terminal.
///
/// At an attended terminal, input is read through [`Term`]'s raw-mode line
/// reader so Ctrl-C surfaces as an [`io::ErrorKind::Interrupted`] error
/// instead of killing the process.  When stdin is a pipe, lines are read
/// directly and EOF counts as cancellation.
pub struct TermConsole {
    term: Term,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn ask(&mut self, message: &str) -> io::Result<Answer> {
        self.term.write_str(message)?;
        self.term.flush()?;

        if self.term.features().is_attended() {
            match self.term.read_line_initial_text("") {
                Ok(line) => Ok(Answer::Line(line)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Answer::Cancelled),
                Err(e) => Err(e),
            }
        } else {
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                Ok(Answer::Cancelled)
            } else {
                Ok(Answer::Line(
                    line.trim_end_matches(['\r', '\n']).to_string(),
                ))
            }
        }
    }

    fn say(&mut self, line: &str) {
        let _ = self.term.write_line(line);
    }
}

// ─── Errors ───────────────────────────────────────────────────────────────────

/// Why a prompt did not produce an answer.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user cancelled the run at a prompt.
    #[error("input cancelled by user")]
    Cancelled,

    /// Reading from the console failed.
    #[error("failed to read user input")]
    Io(#[from] io::Error),
}

/// Ask once, turning [`Answer::Cancelled`] into [`PromptError::Cancelled`].
fn next_line(console: &mut dyn Console, message: &str) -> Result<String, PromptError> {
    match console.ask(message)? {
        Answer::Line(line) => Ok(line),
        Answer::Cancelled => Err(PromptError::Cancelled),
    }
}

// ─── Prompt variants ──────────────────────────────────────────────────────────

/// Prompt for a path until it names an existing regular file.
pub fn existing_file(console: &mut dyn Console, message: &str) -> Result<PathBuf, PromptError> {
    loop {
        let line = next_line(console, message)?;
        let path = paths::expand_home(line.trim());
        if !path.exists() {
            console.say(&format!(
                "    {} The path \"{}\" does not exist.",
                ui::error_tag(),
                path.display()
            ));
            console.say("");
        } else if !path.is_file() {
            console.say(&format!(
                "    {} The path \"{}\" is not a file.",
                ui::error_tag(),
                path.display()
            ));
            console.say("");
        } else {
            return Ok(path);
        }
    }
}

/// Prompt for a destination folder.
///
/// A non-existent path is accepted as-is (it will be created by the copy
/// step); only a path that exists and is not a directory is rejected.
pub fn destination(console: &mut dyn Console, message: &str) -> Result<PathBuf, PromptError> {
    loop {
        let line = next_line(console, message)?;
        let path = paths::expand_home(line.trim());
        if path.exists() && !path.is_dir() {
            console.say(&format!(
                "    {} The path \"{}\" is not a folder.",
                ui::error_tag(),
                path.display()
            ));
            console.say("");
        } else {
            return Ok(path);
        }
    }
}

/// Ask a yes/no question until the user answers exactly `Y` or `N`.
///
/// No case normalization: `y`, `yes`, and everything else re-ask.
pub fn confirm(console: &mut dyn Console, message: &str) -> Result<bool, PromptError> {
    loop {
        let answer = next_line(console, &format!("{message} (Y/N): "))?;
        match answer.as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => console.say(&format!(
                "{} Please input \"Y\" or \"N\"",
                ui::error_tag()
            )),
        }
    }
}

// ─── Scripted console (test support) ──────────────────────────────────────────

/// A [`Console`] fed from a fixed list of answers, recording everything it
/// was asked and everything it said.  Running out of answers counts as
/// cancellation, which also makes the cancellation paths trivial to test.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
    pub said: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub(crate) fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            asked: Vec::new(),
            said: Vec::new(),
        }
    }

    /// Lines said so far that carry an error tag.
    pub(crate) fn errors(&self) -> Vec<&String> {
        self.said.iter().filter(|l| l.contains("ERROR:")).collect()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn ask(&mut self, message: &str) -> io::Result<Answer> {
        self.asked.push(message.to_string());
        Ok(match self.inputs.pop_front() {
            Some(line) => Answer::Line(line),
            None => Answer::Cancelled,
        })
    }

    fn say(&mut self, line: &str) {
        self.said.push(line.to_string());
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
