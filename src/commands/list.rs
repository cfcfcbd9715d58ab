//! Implementation of the `sproutee list` command.

use crate::context::RepoContext;
use crate::error::Result;
use crate::git::SystemGit;
use crate::git_worktree::{WorktreeRecord, list_worktrees};
use std::io::{self, Write};

/// Execute the `sproutee list` command.
pub fn cmd_list() -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let worktrees = list_worktrees(&SystemGit, &ctx.repo_root)?;

    let stdout = io::stdout();
    write_worktree_list(&mut stdout.lock(), &worktrees)?;
    Ok(())
}

/// Write one line per worktree: ordinal, path, branch and short commit.
pub fn write_worktree_list<W: Write>(out: &mut W, worktrees: &[WorktreeRecord]) -> io::Result<()> {
    if worktrees.is_empty() {
        return writeln!(out, "No worktrees found.");
    }

    writeln!(out, "Found {} worktree(s):", worktrees.len())?;
    for (i, wt) in worktrees.iter().enumerate() {
        write!(out, "  {}. {}", i + 1, wt.path.display())?;
        if !wt.is_detached() {
            write!(out, " (branch: {})", wt.branch)?;
        }
        if !wt.commit.is_empty() {
            write!(out, " [{}]", wt.short_commit())?;
        }
        writeln!(out)?;
    }

    Ok(())
}
