//! Home-directory expansion for user-supplied paths.
//!
//! Every path the user types (at a prompt, in the preset file, or in the
//! locations list) goes through [`expand_home`] before it touches the
//! filesystem.  Only a leading `~` *segment* is expanded; `~alice` and a
//! `~` in the middle of a path are left alone.

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` path segment to the user's home directory.
///
/// `~/docs` becomes `/home/alice/docs`, a bare `~` becomes the home
/// directory itself.  Anything else (absolute paths, relative paths,
/// `~alice/docs`) is returned unchanged.  If no home directory can be
/// resolved the input is also returned unchanged.
pub fn expand_home(input: &str) -> PathBuf {
    let mut components = Path::new(input).components();
    if let Some(Component::Normal(first)) = components.next() {
        if first == "~" {
            if let Some(home) = dirs::home_dir() {
                let rest = components.as_path();
                return if rest.as_os_str().is_empty() {
                    home
                } else {
                    home.join(rest)
                };
            }
        }
    }
    PathBuf::from(input)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> PathBuf {
        dirs::home_dir().expect("tests need a resolvable home directory")
    }

    #[test]
    fn tilde_prefix_is_replaced_with_home() {
        assert_eq!(expand_home("~/docs"), home().join("docs"));
    }

    #[test]
    fn remaining_segments_keep_their_order() {
        assert_eq!(expand_home("~/a/b/c"), home().join("a").join("b").join("c"));
    }

    #[test]
    fn bare_tilde_is_home_itself() {
        assert_eq!(expand_home("~"), home());
    }

    #[test]
    fn expanded_path_is_absolute() {
        assert!(expand_home("~/anything").is_absolute());
    }

    #[test]
    fn absolute_path_is_unchanged() {
        assert_eq!(expand_home("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn relative_path_is_unchanged() {
        assert_eq!(expand_home("docs/notes.txt"), PathBuf::from("docs/notes.txt"));
    }

    #[test]
    fn tilde_user_form_is_unchanged() {
        // `~alice` is a different shell feature and is not expanded.
        assert_eq!(expand_home("~alice/docs"), PathBuf::from("~alice/docs"));
    }

    #[test]
    fn tilde_in_the_middle_is_unchanged() {
        assert_eq!(expand_home("/data/~/x"), PathBuf::from("/data/~/x"));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(expand_home(""), PathBuf::new());
    }
}
