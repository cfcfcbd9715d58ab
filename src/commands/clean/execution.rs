//! Per-item confirmation and removal.

use super::display::print_confirmation_prompt;
use super::types::{AnalyzedWorktree, CleanOptions, ItemOutcome, ItemReport};
use crate::error::Result;
use crate::git::WorktreeGit;
use crate::git_worktree::remove_worktree;
use std::io::{BufRead, Write};
use std::path::Path;

/// Process the selected ordinals in order, reporting each as it completes.
///
/// A failed removal is reported and the remaining items are still processed.
pub fn remove_selected<G, R, W>(
    git: &G,
    repo_root: &Path,
    analyzed: &[AnalyzedWorktree],
    selected: &[usize],
    options: CleanOptions,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<ItemReport>>
where
    G: WorktreeGit + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n🗑️  Removing {} worktree(s):", selected.len())?;

    let mut reports = Vec::with_capacity(selected.len());
    for &idx in selected {
        let Some(item) = analyzed.iter().find(|a| a.index == idx) else {
            log::debug!("no worktree with ordinal {}", idx);
            continue;
        };

        writeln!(out, "\n🔄 Processing: {}", item.name())?;

        if item.needs_confirmation(options) {
            print_confirmation_prompt(out, item)?;
            if !read_confirmation(input)? {
                writeln!(out, "   ⏭️  Skipped.")?;
                reports.push(report(item, ItemOutcome::Skipped));
                continue;
            }
        }

        let force = item.requires_force_removal(options);
        let outcome = match remove_worktree(git, repo_root, item.path(), force) {
            Ok(()) => {
                writeln!(out, "   ✅ Deleted: {}", item.name())?;
                ItemOutcome::Deleted
            }
            Err(e) => {
                writeln!(out, "   ❌ Failed: {}", e)?;
                ItemOutcome::Failed(e.to_string())
            }
        };
        reports.push(report(item, outcome));
    }

    Ok(reports)
}

/// Label every candidate with what a real run would do. Never removes.
pub fn report_dry_run<W: Write>(
    analyzed: &[AnalyzedWorktree],
    options: CleanOptions,
    out: &mut W,
) -> Result<Vec<ItemReport>> {
    writeln!(out, "🔍 Dry run - no worktrees will be deleted:")?;

    let mut reports = Vec::with_capacity(analyzed.len());
    for item in analyzed {
        let (label, outcome) = if item.needs_confirmation(options) {
            ("would require confirmation", ItemOutcome::WouldConfirm)
        } else {
            ("would delete", ItemOutcome::WouldDelete)
        };
        writeln!(out, "   {}. {} - {}", item.index, item.name(), label)?;
        reports.push(report(item, outcome));
    }

    Ok(reports)
}

/// Read one confirmation line. Only `y` (any case, surrounding whitespace
/// ignored) confirms; EOF declines.
pub fn read_confirmation<R: BufRead>(input: &mut R) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn report(item: &AnalyzedWorktree, outcome: ItemOutcome) -> ItemReport {
    ItemReport {
        index: item.index,
        path: item.path().to_path_buf(),
        outcome,
    }
}
