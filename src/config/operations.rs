//! Config loading, saving, discovery, and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, SprouteeError};
use crate::fs::atomic_write_file;
use std::path::{Component, Path, PathBuf};

impl Config {
    /// Load config from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SprouteeError::ConfigError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SprouteeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| SprouteeError::ConfigError(format!("failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to pretty-printed JSON (two-space indent).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SprouteeError::ConfigError(format!("failed to serialize config: {}", e))
        })
    }

    /// Validate and write the config to `path`, readable only by the owner.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.validate()?;

        let json = self.to_json()?;
        atomic_write_file(path, &json)?;
        restrict_permissions(path)?;

        Ok(())
    }

    /// Write a default config to `path`, refusing to overwrite an existing file.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();

        if path.exists() {
            return Err(SprouteeError::ConfigError(format!(
                "configuration file already exists: {}",
                path.display()
            )));
        }

        Config::default().save(path)
    }

    /// Find `sproutee.json` in `start_dir` or the nearest ancestor.
    pub fn find<P: AsRef<Path>>(start_dir: P) -> Result<PathBuf> {
        let start_dir = start_dir.as_ref();

        for dir in start_dir.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                log::debug!("using config file {}", candidate.display());
                return Ok(candidate);
            }
        }

        Err(SprouteeError::ConfigError(format!(
            "configuration file '{}' not found.\n\
             Run `sproutee config init` to create one.",
            CONFIG_FILE_NAME
        )))
    }

    /// Find and load the nearest config, starting at `start_dir`.
    pub fn load_from<P: AsRef<Path>>(start_dir: P) -> Result<Self> {
        Self::load(Self::find(start_dir)?)
    }

    /// Validate config values.
    ///
    /// Every `copy_files` entry must be a non-empty relative path that stays
    /// inside the repository.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.copy_files {
            if entry.trim().is_empty() {
                return Err(SprouteeError::ConfigError(
                    "invalid configuration: copy_files entries must be non-empty".to_string(),
                ));
            }

            let path = Path::new(entry);
            if path.is_absolute() || path.has_root() {
                return Err(SprouteeError::ConfigError(format!(
                    "invalid configuration: copy_files entry '{}' must be relative to the repository root",
                    entry
                )));
            }

            if path.components().any(|c| c == Component::ParentDir) {
                return Err(SprouteeError::ConfigError(format!(
                    "invalid configuration: copy_files entry '{}' must not contain '..'",
                    entry
                )));
            }
        }

        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
        SprouteeError::ConfigError(format!(
            "failed to set permissions on '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
