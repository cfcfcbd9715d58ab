//! Configuration model for sproutee.
//!
//! This module defines the Config struct that represents `sproutee.json`.
//! Unknown fields are ignored for forward compatibility; `copy_files` is
//! required.

mod model;
mod operations;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
