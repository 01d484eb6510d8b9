//! Preset configuration and interactive resolution.
//!
//! `Config` is a direct 1-to-1 mapping of `packup.toml`.  The file is
//! entirely optional: without it every run simply prompts for both paths.
//!
//! # File format
//!
//! ```toml
//! [presets]
//! locations   = "~/backup-locations.txt"  # list file, one path per line
//! destination = "~/backups"               # folder receiving the copies
//! ```
//!
//! Either value may be omitted or left empty; empty and whitespace-only
//! strings are treated as absent.  A present preset is only a *shortcut*:
//! the user is asked at startup whether to reuse it, and declining falls
//! back to the interactive prompt.
//!
//! # Layering
//!
//! Presets are read from two places and merged per field, local values
//! winning:
//!
//! 1. `<config_dir>/packup/config.toml` — per-user defaults
//! 2. the `--config` path (default: `./packup.toml`) — per-project values

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::prompt::{self, Console, PromptError};

// ─── Types ────────────────────────────────────────────────────────────────────

/// Root configuration object, deserialised from `packup.toml`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Optional path shortcuts offered at startup.
    #[serde(default)]
    pub presets: Presets,
}

/// The two optional path presets.
///
/// Raw strings, not `PathBuf`s: they are user-written values that still go
/// through home expansion when (and only when) the user confirms them.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Presets {
    /// Path to the locations list file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,

    /// Path to the backup destination folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Presets {
    /// Merge `local` over `self`, field by field.  Local values win.
    pub fn merge(self, local: Presets) -> Presets {
        Presets {
            locations: local.locations.or(self.locations),
            destination: local.destination.or(self.destination),
        }
    }

    /// Drop empty and whitespace-only values; an empty preset is no preset.
    pub fn normalized(self) -> Presets {
        fn clean(value: Option<String>) -> Option<String> {
            value.filter(|s| !s.trim().is_empty())
        }
        Presets {
            locations: clean(self.locations),
            destination: clean(self.destination),
        }
    }
}

/// The resolved (locations-file, destination) pair.
///
/// Resolved once per run, immutable afterward; everything downstream of
/// configuration runs on these two paths.
#[derive(Debug)]
pub struct Resolved {
    pub locations_file: PathBuf,
    pub destination: PathBuf,
}

// ─── Loading ──────────────────────────────────────────────────────────────────

/// Read and parse `path`, returning `None` if the file does not exist.
///
/// Returns an error if the file exists but cannot be read or is not valid
/// TOML.
pub fn parse_file(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(cfg))
}

/// Per-user preset file: `<config_dir>/packup/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|d| d.join("packup").join("config.toml"))
}

/// Load presets from the global file and `local_path`, merged and
/// normalized.  Either file may be absent; an unreadable global file is
/// ignored, an unreadable local file is an error.
pub fn load_presets(local_path: &Path) -> Result<Presets> {
    let global: Presets = global_config_path()
        .as_deref()
        .and_then(|p| parse_file(p).ok().flatten())
        .map(|c| c.presets)
        .unwrap_or_default();

    let local: Presets = parse_file(local_path)?.map(|c| c.presets).unwrap_or_default();

    Ok(global.normalized().merge(local.normalized()))
}

// ─── Interactive resolution ───────────────────────────────────────────────────

/// Resolve the (locations-file, destination) pair.
///
/// A present preset is offered through the confirmation prompt and used
/// as-is (home-expanded) when accepted.  Declined or absent presets fall
/// through to the matching interactive prompt: the locations file must
/// already exist as a regular file, the destination may be a not-yet-created
/// path.
pub fn resolve(presets: &Presets, console: &mut dyn Console) -> Result<Resolved, PromptError> {
    let locations_file = {
        let mut chosen = None;
        if let Some(preset) = &presets.locations {
            if prompt::confirm(console, &format!("Use preset location file \"{preset}\"?"))? {
                chosen = Some(paths::expand_home(preset));
            }
        }
        match chosen {
            Some(path) => path,
            None => prompt::existing_file(console, "Path to backup locations file: ")?,
        }
    };

    console.say("");

    let destination = {
        let mut chosen = None;
        if let Some(preset) = &presets.destination {
            if prompt::confirm(console, &format!("Use preset backup folder \"{preset}\"?"))? {
                chosen = Some(paths::expand_home(preset));
            }
        }
        match chosen {
            Some(path) => path,
            None => prompt::destination(console, "Path to backup destination: ")?,
        }
    };

    Ok(Resolved {
        locations_file,
        destination,
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedConsole;
    use std::io::Write;

    // ── Parsing ──────────────────────────────────────────────────────────────

    #[test]
    fn full_toml_parses_both_presets() {
        let cfg: Config = toml::from_str(
            r#"
            [presets]
            locations   = "~/backup-locations.txt"
            destination = "~/backups"
            "#,
        )
        .expect("parse failed");

        insta::assert_debug_snapshot!(cfg.presets, @r#"
        Presets {
            locations: Some(
                "~/backup-locations.txt",
            ),
            destination: Some(
                "~/backups",
            ),
        }
        "#);
    }

    #[test]
    fn empty_toml_deserialises_to_absent_presets() {
        let cfg: Config = toml::from_str("").expect("empty toml should parse");
        assert!(cfg.presets.locations.is_none());
        assert!(cfg.presets.destination.is_none());
    }

    #[test]
    fn partial_toml_leaves_the_other_preset_absent() {
        let cfg: Config = toml::from_str(
            r#"
            [presets]
            locations = "/tmp/list.txt"
            "#,
        )
        .expect("parse failed");
        assert_eq!(cfg.presets.locations.as_deref(), Some("/tmp/list.txt"));
        assert!(cfg.presets.destination.is_none());
    }

    // ── Normalization and merging ────────────────────────────────────────────

    #[test]
    fn empty_string_presets_are_treated_as_absent() {
        let presets = Presets {
            locations: Some(String::new()),
            destination: Some("   ".into()),
        }
        .normalized();
        assert_eq!(presets, Presets::default());
    }

    #[test]
    fn merge_prefers_local_values() {
        let global = Presets {
            locations: Some("/global/list".into()),
            destination: Some("/global/dest".into()),
        };
        let local = Presets {
            locations: Some("/local/list".into()),
            destination: None,
        };
        let merged = global.merge(local);
        assert_eq!(merged.locations.as_deref(), Some("/local/list"));
        assert_eq!(merged.destination.as_deref(), Some("/global/dest"));
    }

    // ── parse_file ───────────────────────────────────────────────────────────

    #[test]
    fn parse_file_returns_none_for_missing_file() {
        let path = Path::new("/tmp/packup-no-such-config-9281.toml");
        assert!(!path.exists(), "test precondition: file must not exist");
        assert!(parse_file(path).unwrap().is_none());
    }

    #[test]
    fn parse_file_reads_a_valid_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"
            [presets]
            destination = "/mnt/backups"
            "#
        )
        .unwrap();

        let cfg = parse_file(f.path()).unwrap().expect("file exists");
        assert_eq!(cfg.presets.destination.as_deref(), Some("/mnt/backups"));
    }

    #[test]
    fn parse_file_errors_on_invalid_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not valid toml ][[[").unwrap();
        assert!(parse_file(f.path()).is_err());
    }

    // ── resolve ──────────────────────────────────────────────────────────────

    #[test]
    fn resolve_without_presets_prompts_for_both_paths() {
        let list = tempfile::NamedTempFile::new().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(&[
            list.path().to_str().unwrap(),
            dest.path().to_str().unwrap(),
        ]);

        let resolved = resolve(&Presets::default(), &mut console).unwrap();
        assert_eq!(resolved.locations_file, list.path());
        assert_eq!(resolved.destination, dest.path());
        assert_eq!(console.asked[0], "Path to backup locations file: ");
        assert_eq!(console.asked[1], "Path to backup destination: ");
    }

    #[test]
    fn resolve_uses_confirmed_presets() {
        let list = tempfile::NamedTempFile::new().unwrap();
        let presets = Presets {
            locations: Some(list.path().display().to_string()),
            destination: Some("/mnt/backups".into()),
        };
        let mut console = ScriptedConsole::new(&["Y", "Y"]);

        let resolved = resolve(&presets, &mut console).unwrap();
        assert_eq!(resolved.locations_file, list.path());
        assert_eq!(resolved.destination, PathBuf::from("/mnt/backups"));
        assert!(console.asked[0].starts_with("Use preset location file"));
        assert!(console.asked[1].starts_with("Use preset backup folder"));
    }

    #[test]
    fn resolve_expands_home_in_confirmed_presets() {
        let presets = Presets {
            locations: None,
            destination: Some("~/backups".into()),
        };
        let dest_answer = "Y";
        let list = tempfile::NamedTempFile::new().unwrap();
        let mut console =
            ScriptedConsole::new(&[list.path().to_str().unwrap(), dest_answer]);

        let resolved = resolve(&presets, &mut console).unwrap();
        assert_eq!(
            resolved.destination,
            dirs::home_dir().unwrap().join("backups")
        );
    }

    #[test]
    fn resolve_falls_back_to_the_prompt_when_a_preset_is_declined() {
        let preset_list = tempfile::NamedTempFile::new().unwrap();
        let typed_list = tempfile::NamedTempFile::new().unwrap();
        let presets = Presets {
            locations: Some(preset_list.path().display().to_string()),
            destination: None,
        };
        let mut console = ScriptedConsole::new(&[
            "N",
            typed_list.path().to_str().unwrap(),
            "/tmp/packup-dest",
        ]);

        let resolved = resolve(&presets, &mut console).unwrap();
        assert_eq!(resolved.locations_file, typed_list.path());
    }

    #[test]
    fn resolve_prints_a_blank_line_between_the_two_sections() {
        let list = tempfile::NamedTempFile::new().unwrap();
        let mut console =
            ScriptedConsole::new(&[list.path().to_str().unwrap(), "/tmp/packup-dest"]);
        resolve(&Presets::default(), &mut console).unwrap();
        assert!(console.said.contains(&String::new()));
    }

    #[test]
    fn resolve_propagates_cancellation() {
        let presets = Presets {
            locations: Some("/tmp/list".into()),
            destination: Some("/tmp/dest".into()),
        };
        // Answer the first confirmation, then cancel at the second.
        let mut console = ScriptedConsole::new(&["Y"]);
        let err = resolve(&presets, &mut console).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
    }
}
