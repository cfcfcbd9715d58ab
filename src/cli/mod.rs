//! CLI argument parsing for sproutee.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Sproutee: Git worktree creation with automatic copying of local files.
///
/// Each new worktree gets a branch of the same name and a copy of the files
/// listed in `sproutee.json` (e.g. `.env`, IDE settings).
#[derive(Parser, Debug)]
#[command(name = "sproutee")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show debug logging on stderr (-v).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for sproutee.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new worktree and branch.
    ///
    /// The name is used as the branch name and as the prefix of the worktree
    /// directory. Files listed in the configuration are copied into it.
    Create(CreateArgs),

    /// Manage the configuration file.
    Config(ConfigCommand),

    /// List all worktrees of the repository.
    List,

    /// Remove worktrees interactively.
    ///
    /// Each worktree is checked for uncommitted changes; dirty worktrees
    /// require confirmation unless `--force` is given.
    Clean(CleanArgs),
}

/// Arguments for the `create` command.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Worktree and branch name.
    pub name: String,

    /// Open the new worktree in Cursor.
    #[arg(long)]
    pub cursor: bool,

    /// Open the new worktree in VS Code.
    #[arg(long)]
    pub vscode: bool,

    /// Open the new worktree in Xcode (macOS only).
    #[arg(long)]
    pub xcode: bool,

    /// Open the new worktree in Android Studio.
    #[arg(long)]
    pub android_studio: bool,

    /// Directory to open in the editor (relative to the worktree, or absolute).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Config subcommand wrapper.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default sproutee.json in the current directory.
    Init,

    /// Show the current configuration.
    List,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug, Default)]
pub struct CleanArgs {
    /// Show what would be deleted without deleting anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Delete worktrees with uncommitted changes without confirmation.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
