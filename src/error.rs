//! Error types for the sproutee CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sproutee operations.
///
/// Each variant maps to a specific exit code. `RemovalFailed` is recorded per
/// worktree by the clean workflow and normally never reaches `main`.
#[derive(Error, Debug)]
pub enum SprouteeError {
    /// No `.git` directory or pointer file between the start directory and the filesystem root.
    #[error("not inside a Git repository (searched upward from '{}')", .0.display())]
    NotAGitRepository(PathBuf),

    /// `git worktree list --porcelain` could not be run or exited non-zero.
    #[error("failed to list worktrees: {0}")]
    InventoryUnavailable(String),

    /// `git status --porcelain` failed inside a worktree.
    #[error("failed to check status of worktree '{}': {message}", .path.display())]
    StatusUnavailable { path: PathBuf, message: String },

    /// `git worktree remove` failed for a single worktree.
    #[error("failed to remove worktree '{}': {message}", .path.display())]
    RemovalFailed { path: PathBuf, message: String },

    /// Any other git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The configuration file is missing, unreadable, or invalid.
    #[error("{0}")]
    ConfigError(String),

    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Reading the prompt input or writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SprouteeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SprouteeError::NotAGitRepository(_) => exit_codes::USER_ERROR,
            SprouteeError::InventoryUnavailable(_) => exit_codes::GIT_FAILURE,
            SprouteeError::StatusUnavailable { .. } => exit_codes::GIT_FAILURE,
            SprouteeError::RemovalFailed { .. } => exit_codes::GIT_FAILURE,
            SprouteeError::GitError(_) => exit_codes::GIT_FAILURE,
            SprouteeError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            SprouteeError::UserError(_) => exit_codes::USER_ERROR,
            SprouteeError::Io(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for sproutee operations.
pub type Result<T> = std::result::Result<T, SprouteeError>;
