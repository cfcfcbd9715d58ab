//! Status classification: `git status --porcelain` per worktree.
//!
//! A worktree's state is a set of [`Finding`]s plus the file names behind
//! them. Cleanliness and the human summary are folds over that set, so the
//! order lines arrive in never changes the result.

use crate::error::{Result, SprouteeError};
use crate::git::WorktreeGit;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Summary shown for a worktree with no findings.
pub const CLEAN_SUMMARY: &str = "✅ Clean (no changes)";

/// Kind of uncommitted state found in a worktree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Finding {
    /// Changes recorded in the index.
    Staged,
    /// Changes to tracked files not yet staged.
    Unstaged,
    /// Files git does not track.
    Untracked,
}

/// Classified status of a single worktree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeStatus {
    findings: BTreeSet<Finding>,
    changed_files: Vec<String>,
    untracked_files: Vec<String>,
}

/// A finding as presented to the user, carrying the untracked count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    Staged,
    Unstaged,
    Untracked(usize),
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Staged => write!(f, "staged changes"),
            Issue::Unstaged => write!(f, "unstaged changes"),
            Issue::Untracked(count) => write!(f, "{} untracked files", count),
        }
    }
}

impl WorktreeStatus {
    /// Classify raw `git status --porcelain` output.
    pub fn from_porcelain(output: &str) -> Self {
        let mut status = Self::default();
        for line in output.lines() {
            status.classify_line(line);
        }
        status
    }

    fn classify_line(&mut self, line: &str) {
        let mut chars = line.chars();
        let (Some(index), Some(worktree)) = (chars.next(), chars.next()) else {
            log::debug!("skipping short status line: {:?}", line);
            return;
        };
        let file = chars.as_str().trim().to_string();

        if index == '?' && worktree == '?' {
            self.findings.insert(Finding::Untracked);
            self.untracked_files.push(file);
            return;
        }

        if index != ' ' && index != '?' {
            self.findings.insert(Finding::Staged);
            self.note_changed(&file);
        }

        if worktree != ' ' && worktree != '?' {
            self.findings.insert(Finding::Unstaged);
            self.note_changed(&file);
        }
    }

    fn note_changed(&mut self, file: &str) {
        if !self.changed_files.iter().any(|f| f == file) {
            self.changed_files.push(file.to_string());
        }
    }

    /// True when there is nothing staged, unstaged, or untracked.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_staged_changes(&self) -> bool {
        self.findings.contains(&Finding::Staged)
    }

    pub fn has_unstaged_changes(&self) -> bool {
        self.findings.contains(&Finding::Unstaged)
    }

    pub fn has_untracked_files(&self) -> bool {
        self.findings.contains(&Finding::Untracked)
    }

    /// Staged or unstaged files, each listed once in first-seen order.
    pub fn changed_files(&self) -> &[String] {
        &self.changed_files
    }

    pub fn untracked_files(&self) -> &[String] {
        &self.untracked_files
    }

    /// Findings in display order, with the untracked file count attached.
    pub fn issues(&self) -> Vec<Issue> {
        self.findings
            .iter()
            .map(|finding| match finding {
                Finding::Staged => Issue::Staged,
                Finding::Unstaged => Issue::Unstaged,
                Finding::Untracked => Issue::Untracked(self.untracked_files.len()),
            })
            .collect()
    }

    /// One-line human summary, e.g. `⚠️  Has staged changes, 2 untracked files`.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return CLEAN_SUMMARY.to_string();
        }

        let phrases: Vec<String> = self.issues().iter().map(Issue::to_string).collect();
        format!("⚠️  Has {}", phrases.join(", "))
    }
}

/// Query and classify the status of the worktree at `worktree_path`.
///
/// # Returns
///
/// * `Ok(WorktreeStatus)` - Freshly computed status
/// * `Err(SprouteeError::StatusUnavailable)` - The status command failed
pub fn check_worktree_status<G: WorktreeGit + ?Sized>(
    git: &G,
    worktree_path: &Path,
) -> Result<WorktreeStatus> {
    let output = git
        .status_porcelain(worktree_path)
        .map_err(|e| SprouteeError::StatusUnavailable {
            path: worktree_path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(WorktreeStatus::from_porcelain(&output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::SystemGit;
    use crate::test_support::{add_worktree, create_test_repo, git};

    #[test]
    fn test_empty_output_is_clean() {
        let status = WorktreeStatus::from_porcelain("");
        assert!(status.is_clean());
        assert_eq!(status.summary(), CLEAN_SUMMARY);
        assert!(status.summary().contains("Clean"));
    }

    #[test]
    fn test_classifies_each_column() {
        let status = WorktreeStatus::from_porcelain("M  staged.rs\n M unstaged.rs\n?? new.txt");

        assert!(status.has_staged_changes());
        assert!(status.has_unstaged_changes());
        assert!(status.has_untracked_files());
        assert!(!status.is_clean());
        assert_eq!(status.changed_files(), ["staged.rs", "unstaged.rs"]);
        assert_eq!(status.untracked_files(), ["new.txt"]);
    }

    #[test]
    fn test_staged_and_unstaged_same_file_listed_once() {
        let status = WorktreeStatus::from_porcelain("MM both.rs\nAM added.rs\nM  both.rs");

        assert!(status.has_staged_changes());
        assert!(status.has_unstaged_changes());
        assert_eq!(status.changed_files(), ["both.rs", "added.rs"]);
    }

    #[test]
    fn test_only_untracked_is_dirty() {
        let status = WorktreeStatus::from_porcelain("?? a.txt\n?? b.txt");

        assert!(!status.is_clean());
        assert!(!status.has_staged_changes());
        assert!(!status.has_unstaged_changes());
        assert!(status.changed_files().is_empty());
        assert_eq!(status.summary(), "⚠️  Has 2 untracked files");
    }

    #[test]
    fn test_summary_lists_every_issue() {
        let status = WorktreeStatus::from_porcelain("?? one.txt\nMM two.rs\n?? three.txt");
        let summary = status.summary();

        assert_eq!(
            summary,
            "⚠️  Has staged changes, unstaged changes, 2 untracked files"
        );
        assert_eq!(
            status.issues(),
            vec![Issue::Staged, Issue::Unstaged, Issue::Untracked(2)]
        );
    }

    #[test]
    fn test_summary_is_order_independent() {
        let a = WorktreeStatus::from_porcelain(" M x.rs\nA  y.rs");
        let b = WorktreeStatus::from_porcelain("A  y.rs\n M x.rs");
        assert_eq!(a.summary(), b.summary());
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let status = WorktreeStatus::from_porcelain("M\n\n?");
        assert!(status.is_clean());
    }

    #[test]
    fn test_deleted_and_renamed_entries() {
        let status = WorktreeStatus::from_porcelain(" D gone.rs\nR  old.rs -> new.rs");

        assert!(status.has_unstaged_changes());
        assert!(status.has_staged_changes());
        assert_eq!(status.changed_files(), ["gone.rs", "old.rs -> new.rs"]);
    }

    #[test]
    fn test_check_worktree_status_real_repo() {
        let temp_dir = create_test_repo();
        let wt = add_worktree(temp_dir.path(), "status", "status-wt");

        let status = check_worktree_status(&SystemGit, &wt).unwrap();
        assert!(status.is_clean());

        std::fs::write(wt.join("README.md"), "# Changed\n").unwrap();
        std::fs::write(wt.join("notes.txt"), "scratch\n").unwrap();
        std::fs::write(wt.join("staged.txt"), "staged\n").unwrap();
        git(&wt, &["add", "staged.txt"]);

        let status = check_worktree_status(&SystemGit, &wt).unwrap();
        assert!(status.has_staged_changes());
        assert!(status.has_unstaged_changes());
        assert!(status.has_untracked_files());
        assert_eq!(status.changed_files(), ["README.md", "staged.txt"]);
        assert_eq!(status.untracked_files(), ["notes.txt"]);
    }

    #[test]
    fn test_check_worktree_status_missing_dir_is_status_error() {
        let temp_dir = create_test_repo();
        let missing = temp_dir.path().join("does-not-exist");

        let result = check_worktree_status(&SystemGit, &missing);
        assert!(matches!(
            result,
            Err(SprouteeError::StatusUnavailable { .. })
        ));
    }
}
