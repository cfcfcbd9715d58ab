//! Command implementations for sproutee.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod clean;
mod config_cmd;
mod create;
mod list;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Create(args) => create::cmd_create(args),
        Command::Config(config_cmd) => config_cmd::cmd_config(config_cmd.action),
        Command::List => list::cmd_list(),
        Command::Clean(args) => clean::cmd_clean(args),
    }
}

/// Printed when sproutee runs without a command.
pub fn print_banner() {
    println!("Sproutee - Git Worktree Management Tool");
    println!("Use 'sproutee --help' for more information.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ConfigAction, ConfigCommand};
    use crate::config::CONFIG_FILE_NAME;
    use crate::error::SprouteeError;
    use crate::exit_codes;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn dispatch_routes_config_init() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        dispatch(Command::Config(ConfigCommand {
            action: ConfigAction::Init,
        }))
        .unwrap();

        assert!(temp_dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    #[serial]
    fn dispatch_list_outside_repo_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let err = dispatch(Command::List).unwrap_err();
        assert!(matches!(err, SprouteeError::NotAGitRepository(_)));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }
}
