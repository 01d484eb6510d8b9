//! `packup init` — scaffold a starter `packup.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ui;

/// Contents of the generated preset file.
///
/// Both presets are filled with placeholder values so the file documents
/// itself; either line can be emptied or deleted to force the interactive
/// prompt for that path.
const TEMPLATE: &str = r#"# packup presets.
#
# Both values are optional shortcuts: when set (and non-empty), packup
# offers them at startup instead of prompting for the path.  A leading `~`
# expands to your home directory.

[presets]
locations   = "~/backup-locations.txt"  # list file, one path per line
destination = "~/backups"               # folder receiving the copies
"#;

/// Write the starter file at `path`.
///
/// Refuses to overwrite: an existing file at `path` is an error and is left
/// untouched.
pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "'{}' already exists, refusing to overwrite it",
            path.display()
        );
    }
    fs::write(path, TEMPLATE).with_context(|| format!("writing {}", path.display()))?;
    println!("  {}  wrote {}", ui::icon_ok(), path.display());
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
