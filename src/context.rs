//! Repository context resolution for sproutee.
//!
//! Finds the Git repository root by walking upward from the working
//! directory looking for a `.git` entry. A `.git` directory marks a standard
//! repository; a `.git` file starting with `gitdir: ` marks a linked
//! worktree. Both count as a repository root.
//!
//! Commands obtain a [`RepoContext`] through this module and never inspect
//! the filesystem for the root themselves.

use crate::error::{Result, SprouteeError};
use crate::git;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the shared git directory that holds sproutee's worktrees.
pub const WORKTREES_DIR_NAME: &str = "sproutee-worktrees";

/// Marker text at the start of a linked worktree's `.git` pointer file.
const GITDIR_MARKER: &str = "gitdir: ";

/// Resolved paths for a sproutee invocation.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Absolute path to the directory containing `.git`.
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Resolve the repository context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(SprouteeError::NotAGitRepository)` - No `.git` found up to the filesystem root
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SprouteeError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the repository context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(start: P) -> Result<Self> {
        let repo_root = find_repo_root(start)?;
        log::debug!("repository root: {}", repo_root.display());
        Ok(Self { repo_root })
    }

    /// Directory new worktrees are created in.
    ///
    /// Lives inside the shared git directory so it is never picked up as
    /// untracked content of the main worktree.
    pub fn worktrees_dir(&self) -> Result<PathBuf> {
        Ok(git::git_common_dir(&self.repo_root)?.join(WORKTREES_DIR_NAME))
    }
}

/// Walk upward from `start` until a directory containing a valid `.git`
/// entry is found.
pub fn find_repo_root<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = start.as_ref();
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|e| {
                SprouteeError::UserError(format!("failed to get current working directory: {}", e))
            })?
            .join(start)
    };

    for dir in start.ancestors() {
        if has_git_entry(dir) {
            return Ok(dir.to_path_buf());
        }
    }

    Err(SprouteeError::NotAGitRepository(start))
}

/// Check for a `.git` directory or a `gitdir: ` pointer file in `dir`.
fn has_git_entry(dir: &Path) -> bool {
    let git_path = dir.join(".git");

    if git_path.is_dir() {
        return true;
    }

    if git_path.is_file() {
        return fs::read_to_string(&git_path)
            .map(|content| content.starts_with(GITDIR_MARKER))
            .unwrap_or(false);
    }

    false
}

/// Check if two paths are equivalent (handling symlinks, case, etc.).
pub(crate) fn paths_equivalent(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a_canon), Ok(b_canon)) => a_canon == b_canon,
        _ => false,
    }
}
