//! Data types for the clean command.

use crate::cli::CleanArgs;
use crate::git_worktree::{WorktreeRecord, WorktreeStatus};
use std::path::{Path, PathBuf};

/// A removal candidate with its freshly computed status.
#[derive(Debug, Clone)]
pub struct AnalyzedWorktree {
    /// 1-based ordinal shown to the user for selection.
    pub index: usize,
    pub record: WorktreeRecord,
    pub status: WorktreeStatus,
}

impl AnalyzedWorktree {
    pub fn path(&self) -> &Path {
        &self.record.path
    }

    /// Directory name used in every per-item message.
    pub fn name(&self) -> String {
        self.record.dir_name()
    }

    /// Whether deleting this worktree needs an explicit `y` from the user.
    pub fn needs_confirmation(&self, options: CleanOptions) -> bool {
        !self.status.is_clean() && !options.force
    }

    /// Whether removal has to pass `--force` to git.
    ///
    /// Dirty worktrees are always force-removed: reaching removal means the
    /// user already confirmed, or `--force` was given.
    pub fn requires_force_removal(&self, options: CleanOptions) -> bool {
        options.force || !self.status.is_clean()
    }
}

/// Flags controlling a clean run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Report what would happen without removing anything.
    pub dry_run: bool,
    /// Skip confirmation for dirty worktrees.
    pub force: bool,
}

impl From<&CleanArgs> for CleanOptions {
    fn from(args: &CleanArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            force: args.force,
        }
    }
}

/// How a clean run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Selected worktrees were processed (some may have been skipped or failed).
    Completed,
    /// The user entered `cancel`.
    Cancelled,
    /// Only the main worktree exists.
    NoCandidates,
    /// `clean` was entered but every worktree is dirty.
    NoCleanWorktrees,
    /// The selection resolved to nothing.
    NoValidSelection,
    /// `--dry-run`: items were reported, none removed.
    DryRun,
}

/// What happened to a single worktree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Deleted,
    /// Confirmation was declined.
    Skipped,
    /// `git worktree remove` failed; carries the error message.
    Failed(String),
    WouldDelete,
    WouldConfirm,
}

/// Per-item result, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub index: usize,
    pub path: PathBuf,
    pub outcome: ItemOutcome,
}

/// Result of [`super::run_clean_workflow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub outcome: CleanOutcome,
    pub items: Vec<ItemReport>,
}

impl CleanSummary {
    /// A summary for a run that ended before any item was processed.
    pub fn empty(outcome: CleanOutcome) -> Self {
        Self {
            outcome,
            items: Vec::new(),
        }
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.outcome)).count()
    }

    pub fn deleted_count(&self) -> usize {
        self.count(|o| *o == ItemOutcome::Deleted)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| *o == ItemOutcome::Skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed(_)))
    }
}
