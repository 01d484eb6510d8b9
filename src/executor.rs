//! Backup execution: erase confirmation, recursive copy, marker touch.
//!
//! The executor runs strictly in sequence over the resolved locations.
//! There is no transactional rollback: a failure mid-copy leaves a partial
//! destination behind, and the error propagates to the caller untouched.
//! The only recoverable branch is the erase confirmation, where declining
//! aborts the whole run before anything is deleted or copied.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::prompt::{self, Console};
use crate::ui;

/// How a backup run ended, short of an error.
#[derive(Debug, PartialEq)]
pub enum BackupOutcome {
    /// Every location was copied and the destination marker was refreshed.
    Completed,
    /// The user declined to erase the existing destination.
    Aborted,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

/// Copy `locations`, in order, into `destination/<final name>`.
///
/// An existing destination is erased first, but only after the user
/// confirms; declining returns [`BackupOutcome::Aborted`] with the
/// filesystem untouched.  The caller guarantees `locations` is non-empty.
pub fn run_backup(
    locations: &[PathBuf],
    destination: &Path,
    console: &mut dyn Console,
) -> Result<BackupOutcome> {
    if destination.exists() {
        console.say(&format!(
            "Destination \"{}\" already exists.",
            destination.display()
        ));
        if !prompt::confirm(console, "    Erase contents and continue?")? {
            console.say("");
            console.say("Aborted backup.");
            return Ok(BackupOutcome::Aborted);
        }
        fs::remove_dir_all(destination)
            .with_context(|| format!("erasing destination {}", destination.display()))?;
    }

    let progress = ui::copy_progress(locations.len());
    for location in locations {
        console.say(&format!("    Backing up \"{}\"", location.display()));
        let name = location.file_name().with_context(|| {
            format!("location {} has no final name component", location.display())
        })?;
        copy_tree(location, &destination.join(name))?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    touch_marker(destination)?;

    console.say("");
    console.say(&ui::success("Backup complete!"));
    Ok(BackupOutcome::Completed)
}

// ─── Copying ──────────────────────────────────────────────────────────────────

/// Recursively copy `src` (a file or a directory) to `dst`.
///
/// Directory structure is preserved and symlinks are followed.  Errors from
/// the walk or from an individual copy propagate without retry or cleanup.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    if src.is_file() {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::copy(src, dst)
            .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
        return Ok(());
    }

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let target = dst.join(entry.path().strip_prefix(src)?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("copying {} to {}", entry.path().display(), target.display())
            })?;
        }
    }
    Ok(())
}

// ─── Marker ───────────────────────────────────────────────────────────────────

/// Refresh the destination marker.
///
/// Bumps the directory's modification time so the destination itself
/// records when the last backup finished; if nothing ended up at the
/// destination path the directory is created instead.
fn touch_marker(destination: &Path) -> Result<()> {
    if !destination.exists() {
        return fs::create_dir_all(destination)
            .with_context(|| format!("creating destination {}", destination.display()));
    }
    File::open(destination)
        .and_then(|f| f.set_modified(SystemTime::now()))
        .with_context(|| format!("touching destination {}", destination.display()))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
