//! Copying configured files from the repository root into a new worktree.

use crate::config::Config;
use crate::error::{Result, SprouteeError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of copying a single configured file.
#[derive(Debug)]
pub struct CopyResult {
    /// Entry as written in `copy_files`.
    pub relative_path: String,
    pub source: PathBuf,
    pub target: PathBuf,
    /// `None` on success.
    pub error: Option<SprouteeError>,
}

impl CopyResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-file results of a copy run.
#[derive(Debug, Default)]
pub struct CopyReport {
    pub results: Vec<CopyResult>,
}

impl CopyReport {
    pub fn add_result(&mut self, result: CopyResult) {
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total() - self.success_count()
    }
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.results.is_empty() {
            return writeln!(f, "📁 No files configured for copying.");
        }

        writeln!(f, "📁 File Copy Summary:")?;
        writeln!(f, "   Total files: {}", self.total())?;
        writeln!(f, "   ✅ Successful: {}", self.success_count())?;

        if self.failure_count() > 0 {
            writeln!(f, "   ❌ Failed: {}", self.failure_count())?;
            writeln!(f)?;
            writeln!(f, "📋 Failed copies:")?;
            for result in &self.results {
                if let Some(error) = &result.error {
                    writeln!(
                        f,
                        "   • {} → {}",
                        result.source.display(),
                        result.target.display()
                    )?;
                    writeln!(f, "     Error: {}", error)?;
                }
            }
        }

        if self.success_count() > 0 {
            writeln!(f)?;
            writeln!(f, "📋 Successfully copied files:")?;
            for result in self.results.iter().filter(|r| r.is_success()) {
                writeln!(f, "   • {}", result.relative_path)?;
            }
        }

        Ok(())
    }
}

/// Copy `src` to `dst`, creating the parent directories of `dst`.
///
/// Contents and permission bits are copied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SprouteeError::UserError(format!(
                "failed to create target directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::copy(src, dst).map_err(|e| {
        SprouteeError::UserError(format!(
            "failed to copy '{}' to '{}': {}",
            src.display(),
            dst.display(),
            e
        ))
    })?;

    Ok(())
}

/// Copy every `copy_files` entry from `src_root` into `target_root`,
/// keeping the relative layout.
///
/// A missing source or failed copy is recorded in the report and never
/// stops the remaining files.
pub fn copy_configured_files(src_root: &Path, target_root: &Path, config: &Config) -> CopyReport {
    let mut report = CopyReport::default();

    for entry in &config.copy_files {
        let source = src_root.join(entry);
        let target = target_root.join(entry);

        let error = if !source.is_file() {
            Some(SprouteeError::UserError(format!(
                "source file does not exist: {}",
                source.display()
            )))
        } else {
            copy_file(&source, &target).err()
        };

        if let Some(e) = &error {
            log::debug!("copy of {} failed: {}", entry, e);
        }

        report.add_result(CopyResult {
            relative_path: entry.clone(),
            source,
            target,
            error,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(files: &[&str]) -> Config {
        Config {
            copy_files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("source.txt");
        fs::write(&src, "payload").unwrap();
        let dst = temp_dir.path().join("deep").join("nested").join("copy.txt");

        copy_file(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_preserves_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("script.sh");
        fs::write(&src, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();
        let dst = temp_dir.path().join("out").join("script.sh");

        copy_file(&src, &dst).unwrap();

        let mode = fs::metadata(&dst).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_copy_file_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let result = copy_file(
            &temp_dir.path().join("absent"),
            &temp_dir.path().join("dst"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_copy_configured_files_mixed_results() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join(".env"), "SECRET=1\n").unwrap();
        fs::create_dir_all(src.path().join(".vscode")).unwrap();
        fs::write(src.path().join(".vscode").join("settings.json"), "{}").unwrap();

        let report = copy_configured_files(
            src.path(),
            dst.path(),
            &config(&[".env", "missing.txt", ".vscode/settings.json"]),
        );

        assert_eq!(report.total(), 3);
        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.results[1].is_success());
        assert_eq!(
            fs::read_to_string(dst.path().join(".env")).unwrap(),
            "SECRET=1\n"
        );
        assert!(dst.path().join(".vscode").join("settings.json").exists());
    }

    #[test]
    fn test_report_display() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join(".env"), "A=1").unwrap();

        let report = copy_configured_files(src.path(), dst.path(), &config(&[".env", "gone"]));
        let text = report.to_string();

        assert!(text.contains("Total files: 2"));
        assert!(text.contains("✅ Successful: 1"));
        assert!(text.contains("❌ Failed: 1"));
        assert!(text.contains("source file does not exist"));
        assert!(text.contains("   • .env"));
    }

    #[test]
    fn test_empty_report_display() {
        let report = CopyReport::default();
        assert_eq!(report.to_string(), "📁 No files configured for copying.\n");
    }
}
