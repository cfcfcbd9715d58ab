//! Implementation of the `sproutee config` subcommands.

use crate::cli::ConfigAction;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, SprouteeError};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

/// Dispatch a `config` action.
pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => cmd_config_init(),
        ConfigAction::List => cmd_config_list(),
    }
}

/// Write a default `sproutee.json` into the current directory.
fn cmd_config_init() -> Result<()> {
    let config_path = current_dir()?.join(CONFIG_FILE_NAME);
    Config::create_default(&config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!(
        "You can now customize the file to specify which files to copy to new worktrees."
    );
    Ok(())
}

/// Show the nearest configuration.
fn cmd_config_list() -> Result<()> {
    let config = Config::load_from(current_dir()?)?;

    let stdout = io::stdout();
    write_config(&mut stdout.lock(), &config)?;
    Ok(())
}

fn write_config<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(out, "Current configuration:")?;
    writeln!(out, "Files to copy: {}", config.copy_files.len())?;
    for (i, file) in config.copy_files.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, file)?;
    }
    Ok(())
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        SprouteeError::UserError(format!("failed to get current working directory: {}", e))
    })
}
