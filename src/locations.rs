//! Locations-file parsing.
//!
//! The locations file is plain text, one filesystem path per line.  Each
//! line is trimmed and home-expanded; paths that exist are collected in
//! file order, paths that do not are reported and skipped without aborting
//! the load.
//!
//! A blank line trims to the empty path, which never exists, so it is
//! reported with the same `does not exist` line as any other dead entry
//! rather than being skipped silently.  Downstream tooling greps for those
//! lines to find stale list entries, so the literal reporting is kept.
//!
//! An empty result is not an error here; it is the caller's signal to
//! abort the backup before anything is copied.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::paths;
use crate::prompt::Console;
use crate::ui;

/// Read `file` and return the existing locations it names, in file order.
///
/// Prints one `Added` line per kept location and one `ERROR:` line per
/// entry that does not exist.  Fails only when the file itself cannot be
/// read.
pub fn load_locations(file: &Path, console: &mut dyn Console) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("reading locations file {}", file.display()))?;

    let mut locations = Vec::new();
    for line in text.lines() {
        let path = paths::expand_home(line.trim());
        if path.exists() {
            console.say(&format!("    Added \"{}\"", path.display()));
            locations.push(path);
        } else {
            console.say(&format!(
                "    {} The path \"{}\" does not exist.",
                ui::error_tag(),
                path.display()
            ));
        }
    }
    console.say("");

    Ok(locations)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
