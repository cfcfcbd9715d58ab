//! Implementation of the `sproutee clean` command.
//!
//! Lists every worktree except the main one, shows each worktree's git
//! status, then lets the user pick which ones to delete.
//!
//! # Safety
//!
//! - The main worktree is never offered for deletion
//! - Worktrees with staged, unstaged or untracked changes need an explicit
//!   `y` per item unless `--force` is given
//! - `--dry-run` only reports; it never calls `git worktree remove`
//! - A failed removal is reported and the remaining items are still processed

mod display;
mod execution;
mod planning;
mod selection;
mod types;


use crate::cli::CleanArgs;
use crate::context::RepoContext;
use crate::error::Result;
use crate::git::{SystemGit, WorktreeGit};
use std::io::{self, BufRead, Write};
use std::path::Path;

use display::print_selection_prompt;
use execution::{remove_selected, report_dry_run};
use planning::list_analyzed;
use selection::{Resolution, Selection};
use types::{CleanOptions, CleanOutcome, CleanSummary};

/// Execute the `sproutee clean` command against the real git and terminal.
pub fn cmd_clean(args: CleanArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let options = CleanOptions::from(&args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_clean_workflow(
        &SystemGit,
        &ctx.repo_root,
        options,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    for item in &summary.items {
        log::debug!("{}. {}: {:?}", item.index, item.path.display(), item.outcome);
    }
    log::debug!(
        "clean finished: {:?} (deleted {}, skipped {}, failed {})",
        summary.outcome,
        summary.deleted_count(),
        summary.skipped_count(),
        summary.failed_count()
    );

    Ok(())
}

/// Drive the clean workflow: analyze, present, select, confirm, remove.
///
/// # Returns
///
/// * `Ok(CleanSummary)` - The terminal outcome and per-item outcomes
/// * `Err(SprouteeError::InventoryUnavailable | StatusUnavailable)` - Analysis failed
/// * `Err(SprouteeError::Io)` - Reading input or writing output failed
pub fn run_clean_workflow<G, R, W>(
    git: &G,
    repo_root: &Path,
    options: CleanOptions,
    input: &mut R,
    out: &mut W,
) -> Result<CleanSummary>
where
    G: WorktreeGit + ?Sized,
    R: BufRead,
    W: Write,
{
    let analyzed = list_analyzed(git, repo_root, options, out)?;

    if analyzed.is_empty() {
        writeln!(out, "📁 No additional worktrees found to clean.")?;
        return Ok(CleanSummary::empty(CleanOutcome::NoCandidates));
    }

    if options.dry_run {
        let items = report_dry_run(&analyzed, options, out)?;
        return Ok(CleanSummary {
            outcome: CleanOutcome::DryRun,
            items,
        });
    }

    print_selection_prompt(out, options)?;
    let mut line = String::new();
    input.read_line(&mut line)?;

    let selected = match Selection::parse(&line).resolve(&analyzed) {
        Resolution::Cancelled => {
            writeln!(out, "❌ Operation cancelled.")?;
            return Ok(CleanSummary::empty(CleanOutcome::Cancelled));
        }
        Resolution::NoCleanWorktrees => {
            writeln!(out, "📁 No clean worktrees found.")?;
            return Ok(CleanSummary::empty(CleanOutcome::NoCleanWorktrees));
        }
        Resolution::NoValidSelection => {
            writeln!(out, "❌ No valid worktrees selected.")?;
            return Ok(CleanSummary::empty(CleanOutcome::NoValidSelection));
        }
        Resolution::Selected(selected) => selected,
    };

    let items = remove_selected(git, repo_root, &analyzed, &selected, options, input, out)?;

    Ok(CleanSummary {
        outcome: CleanOutcome::Completed,
        items,
    })
}
