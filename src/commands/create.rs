//! Implementation of the `sproutee create` command.
//!
//! Creates a timestamped worktree on a branch named after it, copies the
//! configured files from the repository root, and optionally opens an editor.

use crate::cli::CreateArgs;
use crate::config::Config;
use crate::context::RepoContext;
use crate::editor::{Editor, resolve_target_dir};
use crate::error::{Result, SprouteeError};
use crate::fs::{CopyReport, copy_configured_files};
use crate::git_worktree::create_worktree;
use std::env;
use std::path::{Path, PathBuf};

/// Execute the `sproutee create` command.
///
/// Only worktree creation can fail the command. A missing config, a failed
/// copy or an editor that will not start are reported as warnings.
pub fn cmd_create(args: CreateArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let worktree_path = create_and_populate(&ctx, &args.name)?;

    if let Some(editor) = Editor::from_flags(
        args.cursor,
        args.vscode,
        args.xcode,
        args.android_studio,
    ) {
        open_editor(editor, &worktree_path, args.dir.as_deref());
    }

    Ok(())
}

/// Create the worktree and copy configured files into it.
fn create_and_populate(ctx: &RepoContext, name: &str) -> Result<PathBuf> {
    let worktrees_dir = ctx.worktrees_dir()?;

    println!("Creating worktree '{}' with branch '{}'...", name, name);
    let worktree_path = create_worktree(&ctx.repo_root, &worktrees_dir, name)?;
    println!(
        "✅ Worktree created successfully at: {}",
        worktree_path.display()
    );

    println!("\n📁 Copying configured files...");
    match copy_files(&ctx.repo_root, &worktree_path) {
        Ok(report) => print!("{}", report),
        Err(e) => eprintln!("Warning: Failed to copy files: {}", e),
    }

    Ok(worktree_path)
}

/// Copy the files listed in the nearest `sproutee.json`.
fn copy_files(repo_root: &Path, worktree_path: &Path) -> Result<CopyReport> {
    let cwd = env::current_dir().map_err(|e| {
        SprouteeError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let config = Config::load_from(&cwd)?;

    Ok(copy_configured_files(repo_root, worktree_path, &config))
}

fn open_editor(editor: Editor, worktree_path: &Path, dir: Option<&Path>) {
    let (target, warning) = resolve_target_dir(worktree_path, dir);
    if let Some(warning) = warning {
        println!("{}", warning);
    }

    println!("\n🚀 Opening {}...", editor.display_name());
    if dir.is_some() {
        println!("📁 Target directory: {}", target.display());
    }

    match editor.launch(&target) {
        Ok(()) => println!("✅ {} opened successfully", editor.display_name()),
        Err(e) => eprintln!(
            "Warning: Failed to open {}: {}",
            editor.display_name(),
            e
        ),
    }
}
