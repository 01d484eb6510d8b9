//! Subcommand handlers.
//!
//! Each file in this module corresponds to one user-facing command:
//!
//! | File          | Invocation          | Description                        |
//! |---------------|---------------------|------------------------------------|
//! | `init.rs`     | `packup init`       | Scaffold a `packup.toml`           |
//! | `run.rs`      | `packup` (default)  | Interactive backup flow            |

pub mod init;
pub mod run;
