//! Worktree inventory: `git worktree list --porcelain` parsing.

use crate::error::{Result, SprouteeError};
use crate::git::WorktreeGit;
use std::path::{Path, PathBuf};

/// Ref prefix stripped from `branch` lines.
const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// One worktree as reported by git, including the main worktree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorktreeRecord {
    /// Absolute path to the worktree directory.
    pub path: PathBuf,
    /// Checked-out branch without `refs/heads/`; empty for a detached HEAD.
    pub branch: String,
    /// HEAD commit hash.
    pub commit: String,
}

impl WorktreeRecord {
    /// Whether HEAD is detached (no branch line in the porcelain block).
    pub fn is_detached(&self) -> bool {
        self.branch.is_empty()
    }

    /// First eight characters of the commit hash, for display.
    pub fn short_commit(&self) -> &str {
        match self.commit.char_indices().nth(8) {
            Some((idx, _)) => &self.commit[..idx],
            None => &self.commit,
        }
    }

    /// Final path component, used as the display name.
    pub fn dir_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// List all worktrees of the repository, main worktree first.
///
/// # Returns
///
/// * `Ok(Vec<WorktreeRecord>)` - One record per worktree, in git's order
/// * `Err(SprouteeError::InventoryUnavailable)` - The listing command failed
pub fn list_worktrees<G: WorktreeGit + ?Sized>(
    git: &G,
    repo_root: &Path,
) -> Result<Vec<WorktreeRecord>> {
    let output = git
        .worktree_list_porcelain(repo_root)
        .map_err(|e| SprouteeError::InventoryUnavailable(e.to_string()))?;

    Ok(parse_worktree_list(&output))
}

/// Parse `git worktree list --porcelain` output.
///
/// Blocks are separated by blank lines; each line is `key value`. Lines
/// without a value (`bare`, `detached`, `locked`) and unknown keys are
/// ignored. Blocks that never set a path are dropped.
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeRecord> {
    let mut worktrees = Vec::new();
    let mut current = WorktreeRecord::default();

    for line in output.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut worktrees);
            continue;
        }

        let Some((key, value)) = line.split_once(' ') else {
            log::debug!("skipping porcelain line without value: {:?}", line);
            continue;
        };

        match key {
            "worktree" => current.path = PathBuf::from(value),
            "branch" => {
                current.branch = value
                    .strip_prefix(BRANCH_REF_PREFIX)
                    .unwrap_or(value)
                    .to_string()
            }
            "HEAD" => current.commit = value.to_string(),
            _ => {}
        }
    }

    flush(&mut current, &mut worktrees);
    worktrees
}

fn flush(current: &mut WorktreeRecord, worktrees: &mut Vec<WorktreeRecord>) {
    let record = std::mem::take(current);
    if record.path.as_os_str().is_empty() {
        if record != WorktreeRecord::default() {
            log::debug!("dropping worktree block without a path: {:?}", record);
        }
        return;
    }
    worktrees.push(record);
}
