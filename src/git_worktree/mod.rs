//! Git worktree helpers for sproutee.
//!
//! - Listing worktrees (`git worktree list --porcelain`)
//! - Classifying each worktree's status (`git status --porcelain`)
//! - Removing worktrees, plain or forced
//! - Creating timestamped worktrees for the `create` command
//!
//! Listing, status and removal go through the [`crate::git::WorktreeGit`]
//! trait so the clean workflow can be driven without a real repository.

mod create;
mod inventory;
mod removal;
mod status;

// Re-export public API
pub use create::create_worktree;
pub use inventory::{WorktreeRecord, list_worktrees};
pub use removal::remove_worktree;
pub use status::{WorktreeStatus, check_worktree_status};
