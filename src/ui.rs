//! Console presentation: icons, the startup banner, and the copy progress bar.
//!
//! All strings the user reads are produced by the modules that own the
//! behavior (prompts, loader, executor); this module only supplies the
//! shared visual pieces.  Styling degrades to plain text automatically when
//! output is piped, so tests can assert on the unstyled message content.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::prompt::Console;

// ─── Icons and tags ───────────────────────────────────────────────────────────

/// Green ✓, printed when a step succeeds.
pub fn icon_ok() -> console::StyledObject<&'static str> {
    style("✓").green().bold()
}

/// Red `ERROR:` tag used by every rejected input and skipped location.
pub fn error_tag() -> console::StyledObject<&'static str> {
    style("ERROR:").red().bold()
}

// ─── Banner ───────────────────────────────────────────────────────────────────

/// Print the startup banner: program name and version, then a blank line.
pub fn banner(console: &mut dyn Console) {
    console.say(&format!(
        "{} {}",
        style("packup").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    ));
    console.say("");
}

// ─── Progress ─────────────────────────────────────────────────────────────────

/// Progress bar over the per-location copy loop.
///
/// Draws to stderr and hides itself when the terminal is not attended, so
/// piped runs (and the integration tests) see only the plain message lines.
pub fn copy_progress(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("  {bar:24.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("██░"),
    );
    pb
}

/// The cyan success line printed after the last copy finishes.
pub fn success(message: &str) -> String {
    format!("{} {}", style("✓").cyan().bold(), style(message).bold())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
