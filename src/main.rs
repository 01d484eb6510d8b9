//! `packup` — interactive backup of a list of locations into a folder.
//!
//! # Overview
//!
//! `packup` asks for two paths: a *locations file* (plain text, one path per
//! line) and a *destination folder*.  It then copies every existing location
//! recursively into the destination, one subfolder per location.  A preset
//! file (`packup.toml`) can pre-answer either path; everything else is
//! interactive.
//!
//! # Usage
//!
//! ```text
//! packup                 # run the interactive backup flow
//! packup init            # scaffold a packup.toml in the current directory
//! packup --print-config  # show the merged presets without running anything
//! ```
//!
//! # Module layout
//!
//! | Module                   | Responsibility                              |
//! |--------------------------|---------------------------------------------|
//! | [`cli`]                  | Argument types parsed by clap               |
//! | [`config`]               | Preset file + interactive resolution        |
//! | [`paths`]                | Home-directory expansion                    |
//! | [`prompt`]               | Console abstraction, read-loop prompts      |
//! | [`locations`]            | Locations-file parsing                      |
//! | [`executor`]             | Erase, recursive copy, marker touch         |
//! | [`ui`]                   | Icons, banner, copy progress bar            |
//! | [`commands::init`]       | `packup init` subcommand                    |
//! | [`commands::run`]        | Interactive backup flow                     |

mod cli;
mod commands;
mod config;
mod executor;
mod locations;
mod paths;
mod prompt;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Subcommand};
use commands::run::RunStatus;

/// Exit status for a run cancelled at a prompt, mirroring the conventional
/// code for an interrupted process.
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        // ── packup init ───────────────────────────────────────────────────────
        Some(Subcommand::Init) => {
            commands::init::run(&cli.config)?;
            Ok(ExitCode::SUCCESS)
        },

        // ── packup (interactive flow) ─────────────────────────────────────────
        None => {
            let presets = config::load_presets(&cli.config)?;

            if cli.print_config {
                println!("{presets:#?}");
                return Ok(ExitCode::SUCCESS);
            }

            match commands::run::run(&presets)? {
                // A declined confirmation or an empty location list is a
                // clean stop, not a failure.
                RunStatus::Completed | RunStatus::Aborted => Ok(ExitCode::SUCCESS),
                RunStatus::Interrupted => Ok(ExitCode::from(EXIT_INTERRUPTED)),
            }
        },
    }
}
