//! The interactive backup flow — runs when no subcommand is given.
//!
//! # Flow (in order)
//!
//! | # | Step      | Module              | Outcome                            |
//! |---|-----------|---------------------|------------------------------------|
//! | 1 | Configure | [`crate::config`]   | (locations-file, destination) pair |
//! | 2 | Load      | [`crate::locations`]| surviving locations, in file order |
//! | 3 | Execute   | [`crate::executor`] | erase + copy + marker touch        |
//!
//! An empty location list aborts between steps 2 and 3, before anything is
//! deleted or copied.  Cancellation at any prompt unwinds to [`run_with`],
//! which prints the farewell line and returns a distinct [`RunStatus`] so
//! `main` can map it to an exit status; it is never a process kill inside
//! the flow itself.

use anyhow::Result;

use crate::{
    config::{self, Presets},
    executor::{self, BackupOutcome},
    locations,
    prompt::{Console, PromptError, TermConsole},
    ui,
};

/// How the whole run ended.
#[derive(Debug, PartialEq)]
pub enum RunStatus {
    /// The backup finished and the success message was printed.
    Completed,
    /// The run stopped cleanly: empty location list or declined erase.
    Aborted,
    /// The user cancelled at a prompt; the farewell was printed.
    Interrupted,
}

// ─── Entry points ─────────────────────────────────────────────────────────────

/// Run the interactive flow on the process terminal.
pub fn run(presets: &Presets) -> Result<RunStatus> {
    let mut console = TermConsole::new();
    run_with(presets, &mut console)
}

/// Run the interactive flow on any console, mapping prompt cancellation to
/// [`RunStatus::Interrupted`].  Filesystem errors pass through untouched.
pub(crate) fn run_with(presets: &Presets, console: &mut dyn Console) -> Result<RunStatus> {
    match pipeline(presets, console) {
        Err(e)
            if matches!(
                e.downcast_ref::<PromptError>(),
                Some(PromptError::Cancelled)
            ) =>
        {
            console.say("");
            console.say("Goodbye!");
            Ok(RunStatus::Interrupted)
        }
        other => other,
    }
}

// ─── Pipeline ─────────────────────────────────────────────────────────────────

fn pipeline(presets: &Presets, console: &mut dyn Console) -> Result<RunStatus> {
    ui::banner(console);

    let resolved = config::resolve(presets, console)?;
    console.say("");
    console.say("Starting backup process...");

    let locations = locations::load_locations(&resolved.locations_file, console)?;
    if locations.is_empty() {
        console.say("");
        console.say("Aborted backup.");
        return Ok(RunStatus::Aborted);
    }

    match executor::run_backup(&locations, &resolved.destination, console)? {
        BackupOutcome::Completed => Ok(RunStatus::Completed),
        BackupOutcome::Aborted => Ok(RunStatus::Aborted),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
