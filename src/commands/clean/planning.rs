//! Building the list of removal candidates.

use super::display::{print_analysis_header, print_checking, print_item_status};
use super::types::{AnalyzedWorktree, CleanOptions};
use crate::context::paths_equivalent;
use crate::error::Result;
use crate::git::WorktreeGit;
use crate::git_worktree::{WorktreeRecord, check_worktree_status, list_worktrees};
use std::io::Write;
use std::path::Path;

/// Every linked worktree except the one at `repo_root`.
///
/// Git always lists the main worktree first, so the first block is dropped
/// regardless of where `repo_root` points. When run from inside a linked
/// worktree, `repo_root` is that worktree and it is excluded as well.
pub fn list_candidates<G: WorktreeGit + ?Sized>(
    git: &G,
    repo_root: &Path,
) -> Result<Vec<WorktreeRecord>> {
    let mut worktrees = list_worktrees(git, repo_root)?.into_iter();

    if let Some(main) = worktrees.next() {
        log::debug!("main worktree: {}", main.path.display());
    }

    Ok(worktrees
        .filter(|record| !paths_equivalent(&record.path, repo_root))
        .collect())
}

/// List every candidate with its current status, printing progress to `out`.
///
/// Ordinals start at 1 and follow git's listing order. Each `Checking`
/// line is written before that worktree's status query. A status failure
/// for any worktree aborts the whole listing. Nothing is printed when there
/// are no candidates.
///
/// # Returns
///
/// * `Ok(Vec<AnalyzedWorktree>)` - Candidates, possibly empty
/// * `Err(SprouteeError::InventoryUnavailable)` - Listing failed
/// * `Err(SprouteeError::StatusUnavailable)` - A status check failed
/// * `Err(SprouteeError::Io)` - Writing progress failed
pub fn list_analyzed<G, W>(
    git: &G,
    repo_root: &Path,
    options: CleanOptions,
    out: &mut W,
) -> Result<Vec<AnalyzedWorktree>>
where
    G: WorktreeGit + ?Sized,
    W: Write,
{
    let candidates = list_candidates(git, repo_root)?;
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    print_analysis_header(out, candidates.len())?;

    let mut analyzed = Vec::with_capacity(candidates.len());
    for (i, record) in candidates.into_iter().enumerate() {
        print_checking(out, i + 1, &record.dir_name())?;

        let status = check_worktree_status(git, &record.path)?;
        log::debug!("{}: {}", record.path.display(), status.summary());

        let item = AnalyzedWorktree {
            index: i + 1,
            record,
            status,
        };
        print_item_status(out, &item, options)?;
        analyzed.push(item);
    }

    Ok(analyzed)
}
