//! Shared building blocks for the pkgbridge backends.
//!
//! This crate holds the pieces every concrete backend leans on:
//! - The process-backed command runner, a recording runner, and the dry-run
//!   runner that only lets read-only listings through.
//! - The JSON package listing helper used by the command-line backends.

mod dry_run;
mod listing;
mod recording;
mod runner;

/// Runner for `--dry-run`: real listings, recorded changes.
pub use dry_run::{DryRunRunner, READ_ONLY_COMMANDS};
/// Run a listing command and degrade every failure to an empty list.
pub use listing::list_packages_from_command;
/// `CommandRunner` that records argument vectors instead of spawning.
pub use recording::RecordingRunner;
/// Child-process implementation of `CommandRunner`.
pub use runner::ProcessRunner;
