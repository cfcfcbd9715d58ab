//! Worktree creation and naming.

use crate::error::{Result, SprouteeError};
use crate::git::{run_git, run_git_with_exit_code};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Timestamp layout appended to worktree directory names.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory name for a new worktree: `<name>_<YYYYMMDD_HHMMSS>`.
pub fn worktree_dir_name(name: &str, now: DateTime<Local>) -> String {
    format!("{}_{}", name, now.format(TIMESTAMP_FORMAT))
}

/// Check if a branch exists locally.
///
/// # Returns
///
/// * `Ok(bool)` - Whether `refs/heads/<branch>` resolves
/// * `Err(SprouteeError::GitError)` - git could not be run or the lookup itself failed
pub fn branch_exists<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<bool> {
    let refname = format!("refs/heads/{}", branch);
    let (exit_code, output) =
        run_git_with_exit_code(repo_root, &["rev-parse", "--verify", "--quiet", &refname])?;

    // `--quiet` reports a missing ref as a silent exit 1.
    match exit_code {
        Some(0) => Ok(true),
        Some(1) => Ok(false),
        code => Err(SprouteeError::GitError(format!(
            "failed to look up branch '{}' (exit code {}): {}",
            branch,
            code.unwrap_or(-1),
            output.stderr
        ))),
    }
}

/// Create a worktree named `name` on branch `name` under `worktrees_dir`.
///
/// The branch is checked out if it exists and created from the current
/// HEAD otherwise.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Absolute path of the new worktree
/// * `Err(SprouteeError::GitError)` - Directory creation or `git worktree add` failed
pub fn create_worktree(repo_root: &Path, worktrees_dir: &Path, name: &str) -> Result<PathBuf> {
    if name.trim().is_empty() {
        return Err(SprouteeError::UserError(
            "worktree name must not be empty".to_string(),
        ));
    }

    std::fs::create_dir_all(worktrees_dir).map_err(|e| {
        SprouteeError::GitError(format!(
            "failed to create worktree base directory '{}': {}",
            worktrees_dir.display(),
            e
        ))
    })?;

    let worktree_path = worktrees_dir.join(worktree_dir_name(name, Local::now()));
    let worktree_str = worktree_path.to_string_lossy();

    let args: Vec<&str> = if branch_exists(repo_root, name)? {
        vec!["worktree", "add", &worktree_str, name]
    } else {
        log::debug!("branch '{}' does not exist; creating it from HEAD", name);
        vec!["worktree", "add", "-b", name, &worktree_str]
    };

    run_git(repo_root, &args).map_err(|e| {
        SprouteeError::GitError(format!(
            "failed to create worktree at '{}' for branch '{}': {}",
            worktree_str, name, e
        ))
    })?;

    Ok(worktree_path)
}
