//! Display and formatting utilities for clean command output.

use super::types::{AnalyzedWorktree, CleanOptions};
use std::io::{self, Write};

/// Print the analysis header for `count` candidates.
pub fn print_analysis_header<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "🔍 Found {} worktree(s) to analyze:", count)?;
    writeln!(out)
}

/// Announce the status check of one candidate before it runs.
pub fn print_checking<W: Write>(out: &mut W, index: usize, name: &str) -> io::Result<()> {
    writeln!(out, "Checking {}. {}...", index, name)?;
    out.flush()
}

/// Print one candidate's status summary.
///
/// Dirty worktrees also list their files unless `--force` is active.
pub fn print_item_status<W: Write>(
    out: &mut W,
    item: &AnalyzedWorktree,
    options: CleanOptions,
) -> io::Result<()> {
    writeln!(out, "   {}", item.status.summary())?;

    if item.needs_confirmation(options) {
        let status = &item.status;
        if status.has_staged_changes() || status.has_unstaged_changes() {
            writeln!(
                out,
                "   📝 Changed files: {}",
                status.changed_files().join(", ")
            )?;
        }
        if status.has_untracked_files() {
            writeln!(
                out,
                "   📄 Untracked files: {}",
                status.untracked_files().join(", ")
            )?;
        }
    }
    writeln!(out)
}

/// Print the selection instructions and the `Your choice:` prompt.
pub fn print_selection_prompt<W: Write>(out: &mut W, options: CleanOptions) -> io::Result<()> {
    writeln!(out, "💡 Select worktrees to delete:")?;
    writeln!(out, "   - Enter numbers separated by commas (e.g., 1,3,5)")?;
    writeln!(out, "   - Enter 'clean' to delete only clean worktrees")?;
    writeln!(out, "   - Enter 'all' to delete all worktrees")?;
    writeln!(out, "   - Enter 'cancel' to abort")?;

    if !options.force {
        writeln!(
            out,
            "   ⚠️  Worktrees with uncommitted changes will require confirmation"
        )?;
    }

    write!(out, "\nYour choice: ")?;
    out.flush()
}

/// Print the confirmation prompt for a dirty worktree.
pub fn print_confirmation_prompt<W: Write>(out: &mut W, item: &AnalyzedWorktree) -> io::Result<()> {
    writeln!(out, "⚠️  This worktree has uncommitted changes!")?;
    writeln!(out, "   {}", item.status.summary())?;
    write!(out, "   Continue with deletion? (y/N): ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git_worktree::{WorktreeRecord, WorktreeStatus};
    use std::path::PathBuf;

    fn item(porcelain: &str) -> AnalyzedWorktree {
        AnalyzedWorktree {
            index: 1,
            record: WorktreeRecord {
                path: PathBuf::from("/repo/.git/sproutee-worktrees/feat_20250101_120000"),
                branch: "feat".to_string(),
                commit: "0123456789".to_string(),
            },
            status: WorktreeStatus::from_porcelain(porcelain),
        }
    }

    fn render(item: &AnalyzedWorktree, options: CleanOptions) -> String {
        let mut out = Vec::new();
        print_item_status(&mut out, item, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_checking_lines() {
        let mut out = Vec::new();
        print_analysis_header(&mut out, 2).unwrap();
        print_checking(&mut out, 1, "feat_20250101_120000").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "🔍 Found 2 worktree(s) to analyze:\n\nChecking 1. feat_20250101_120000...\n"
        );
    }

    #[test]
    fn test_status_lists_files_of_dirty_worktree() {
        let text = render(&item("M  a.rs\n?? notes.txt"), CleanOptions::default());

        assert!(text.starts_with("   ⚠️  Has"));
        assert!(text.contains("   📝 Changed files: a.rs"));
        assert!(text.contains("   📄 Untracked files: notes.txt"));
    }

    #[test]
    fn test_status_hides_files_under_force() {
        let options = CleanOptions {
            dry_run: false,
            force: true,
        };
        let text = render(&item(" M a.rs"), options);

        assert!(text.contains("unstaged changes"));
        assert!(!text.contains("Changed files"));
    }

    #[test]
    fn test_selection_prompt_mentions_confirmation_only_without_force() {
        let mut out = Vec::new();
        print_selection_prompt(&mut out, CleanOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("will require confirmation"));
        assert!(text.ends_with("Your choice: "));

        let mut out = Vec::new();
        let options = CleanOptions {
            dry_run: false,
            force: true,
        };
        print_selection_prompt(&mut out, options).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("confirmation"));
    }
}
