//! Git command runner for sproutee.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling, plus the [`WorktreeGit`] seam the clean
//! workflow talks to. All git subprocesses go through this module.

use crate::error::{Result, SprouteeError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trailing whitespace removed).
    ///
    /// Leading whitespace is significant: the first line of
    /// `git status --porcelain` may start with a blank index column.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout)
                .trim_end()
                .to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(SprouteeError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let (exit_code, git_output) = run_git_with_exit_code(cwd, args)?;

    if exit_code == Some(0) {
        Ok(git_output)
    } else {
        let exit_code = exit_code.unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };
        log::debug!("git {} exited with {}", args.join(" "), exit_code);

        Err(SprouteeError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Run a git command and hand back its exit code instead of failing on it.
///
/// For commands whose non-zero exits carry meaning. Only a spawn failure is
/// an error; the exit code is `None` when git was killed by a signal.
pub fn run_git_with_exit_code<P: AsRef<Path>>(
    cwd: P,
    args: &[&str],
) -> Result<(Option<i32>, GitOutput)> {
    let cwd = cwd.as_ref();
    log::debug!("$ git {} [{}]", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SprouteeError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    Ok((output.status.code(), GitOutput::from_output(&output)))
}

/// Resolve the shared git directory (`.git` of the main worktree).
///
/// Works from the main worktree and from linked worktrees alike, so new
/// worktrees always land under the same metadata directory.
pub fn git_common_dir<P: AsRef<Path>>(repo_root: P) -> Result<PathBuf> {
    let repo_root = repo_root.as_ref();
    let output = run_git(repo_root, &["rev-parse", "--git-common-dir"])?;
    let dir = PathBuf::from(output.stdout.trim());

    // Older gits print the common dir relative to the working directory.
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(repo_root.join(dir))
    }
}

/// The version-control operations the worktree inventory, status classifier
/// and removal executor need.
///
/// Each call is synchronous and returns raw porcelain text; parsing lives in
/// `git_worktree`.
pub trait WorktreeGit {
    /// Raw output of `git worktree list --porcelain`, run from the repository root.
    fn worktree_list_porcelain(&self, repo_root: &Path) -> Result<String>;

    /// Raw output of `git status --porcelain`, run inside the worktree.
    fn status_porcelain(&self, worktree: &Path) -> Result<String>;

    /// `git worktree remove [--force] <path>`, run from the repository root.
    fn worktree_remove(&self, repo_root: &Path, worktree: &Path, force: bool) -> Result<()>;
}

/// [`WorktreeGit`] backed by the `git` executable on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl WorktreeGit for SystemGit {
    fn worktree_list_porcelain(&self, repo_root: &Path) -> Result<String> {
        Ok(run_git(repo_root, &["worktree", "list", "--porcelain"])?.stdout)
    }

    fn status_porcelain(&self, worktree: &Path) -> Result<String> {
        Ok(run_git(worktree, &["status", "--porcelain"])?.stdout)
    }

    fn worktree_remove(&self, repo_root: &Path, worktree: &Path, force: bool) -> Result<()> {
        let worktree_str = worktree.to_string_lossy();

        let args: Vec<&str> = if force {
            vec!["worktree", "remove", "--force", &worktree_str]
        } else {
            vec!["worktree", "remove", &worktree_str]
        };

        run_git(repo_root, &args)?;
        Ok(())
    }
}
