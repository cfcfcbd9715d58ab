//! Worktree removal.

use crate::error::{Result, SprouteeError};
use crate::git::WorktreeGit;
use std::path::Path;

/// Remove a worktree.
///
/// Uses `git worktree remove <path>`; `force` adds `--force`, which git
/// requires when the worktree has modified or untracked files.
///
/// # Returns
///
/// * `Ok(())` - Worktree removed
/// * `Err(SprouteeError::RemovalFailed)` - git refused or failed
pub fn remove_worktree<G: WorktreeGit + ?Sized>(
    git: &G,
    repo_root: &Path,
    worktree_path: &Path,
    force: bool,
) -> Result<()> {
    log::debug!(
        "removing worktree {} (force: {})",
        worktree_path.display(),
        force
    );

    git.worktree_remove(repo_root, worktree_path, force)
        .map_err(|e| SprouteeError::RemovalFailed {
            path: worktree_path.to_path_buf(),
            message: e.to_string(),
        })
}
