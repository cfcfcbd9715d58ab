//! Config struct definition.

use serde::{Deserialize, Serialize};

/// File name searched for from the working directory upward.
pub const CONFIG_FILE_NAME: &str = "sproutee.json";

/// Configuration for sproutee.
///
/// ```json
/// { "copy_files": [".env", ".vscode/settings.json"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Paths relative to the repository root copied into each new worktree.
    pub copy_files: Vec<String>,
}
