//! Sproutee: Git worktree creation with automatic copying of local files.
//!
//! This is the main entry point for the `sproutee` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod git_worktree;
mod logging;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    let Some(command) = cli.command else {
        commands::print_banner();
        return ExitCode::from(exit_codes::SUCCESS as u8);
    };

    match commands::dispatch(command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
