//! Opening a freshly created worktree in an editor.
//!
//! The editor process is spawned and left running; sproutee never waits on it.

use crate::error::{Result, SprouteeError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Editors that `sproutee create` can launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    Cursor,
    VsCode,
    Xcode,
    AndroidStudio,
}

impl Editor {
    /// Pick the editor from the `create` flags. The first set flag wins, in
    /// the order cursor, vscode, xcode, android-studio.
    pub fn from_flags(cursor: bool, vscode: bool, xcode: bool, android_studio: bool) -> Option<Self> {
        [
            (cursor, Editor::Cursor),
            (vscode, Editor::VsCode),
            (xcode, Editor::Xcode),
            (android_studio, Editor::AndroidStudio),
        ]
        .into_iter()
        .find_map(|(set, editor)| set.then_some(editor))
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Editor::Cursor => "Cursor",
            Editor::VsCode => "VS Code",
            Editor::Xcode => "Xcode",
            Editor::AndroidStudio => "Android Studio",
        }
    }

    /// Build the launch command for `path` on the given OS
    /// (as named by `std::env::consts::OS`).
    pub fn command_for(self, os: &str, path: &Path) -> Result<Command> {
        let mut cmd = match (self, os) {
            (Editor::Cursor, "macos" | "windows" | "linux") => Command::new("cursor"),
            (Editor::VsCode, "macos" | "windows" | "linux") => Command::new("code"),
            (Editor::Xcode, "macos") => Command::new("xed"),
            (Editor::Xcode, _) => {
                return Err(SprouteeError::UserError(
                    "Xcode is only available on macOS".to_string(),
                ));
            }
            (Editor::AndroidStudio, "macos") => {
                let mut cmd = Command::new("open");
                cmd.args(["-a", "Android Studio"]);
                cmd
            }
            (Editor::AndroidStudio, "windows") => Command::new("studio"),
            (Editor::AndroidStudio, "linux") => Command::new("studio.sh"),
            (_, other) => {
                return Err(SprouteeError::UserError(format!(
                    "unsupported operating system: {}",
                    other
                )));
            }
        };

        cmd.arg(path);
        Ok(cmd)
    }

    /// Spawn the editor on `path` without waiting for it to exit.
    pub fn launch(self, path: &Path) -> Result<()> {
        let mut cmd = self.command_for(std::env::consts::OS, path)?;
        log::debug!("launching {:?}", cmd);

        cmd.spawn().map_err(|e| {
            SprouteeError::UserError(format!(
                "failed to start {}: {}",
                self.display_name(),
                e
            ))
        })?;

        Ok(())
    }
}

/// Resolve the directory to open inside a new worktree.
///
/// A relative `dir` is taken relative to the worktree, an absolute one is used
/// as-is. When the result does not exist the worktree root is returned along
/// with a warning message.
pub fn resolve_target_dir(worktree: &Path, dir: Option<&Path>) -> (PathBuf, Option<String>) {
    let Some(dir) = dir else {
        return (worktree.to_path_buf(), None);
    };

    let target = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        worktree.join(dir)
    };

    if target.exists() {
        (target, None)
    } else {
        let warning = format!(
            "Warning: Directory '{}' does not exist, using worktree root instead",
            target.display()
        );
        (worktree.to_path_buf(), Some(warning))
    }
}
