//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  The CLI surface is deliberately small: the backup
//! flow itself is fully interactive and takes no flags, so the arguments
//! only cover where the preset file lives and the `init` scaffold.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name    = "packup",
    about   = "Interactive backup: copy a list of locations into a destination folder",
    version,
    // Show a compact two-column help layout.
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// Path to the preset file.
    ///
    /// Defaults to `packup.toml` in the current working directory.  The file
    /// is optional; without it (or with empty values) every run prompts for
    /// the locations file and the destination interactively.
    #[arg(short, long, default_value = "packup.toml")]
    pub config: PathBuf,

    /// Subcommand to run.  Omit to start an interactive backup.
    #[command(subcommand)]
    pub command: Option<Subcommand>,

    /// Print the merged presets and exit without running anything.
    ///
    /// Handy for verifying the TOML (and the global/local merge) before an
    /// interactive run.
    #[arg(long)]
    pub print_config: bool,
}

/// Explicit subcommands.  Running `packup` with no subcommand starts the
/// interactive backup.
#[derive(clap::Subcommand, Debug, PartialEq)]
pub enum Subcommand {
    /// Scaffold a `packup.toml` in the current directory.
    ///
    /// The generated file carries both presets with placeholder values ready
    /// to be edited.  Exits with an error if the file already exists to
    /// avoid accidental overwrites.
    Init,
}

// ─── Tests ────────────────────────────────────────────────────────────────────
