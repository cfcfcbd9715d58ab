//! Filesystem utilities for sproutee.
//!
//! Atomic writes for the config file and the copy of configured files into
//! new worktrees.

mod atomic;
mod copy;

pub use atomic::atomic_write_file;
pub use copy::{CopyReport, copy_configured_files};
