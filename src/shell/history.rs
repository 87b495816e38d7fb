//! Command history settings.

use anyhow::Result;
use rustyline::history::FileHistory;
use rustyline::{Editor, Helper};
use std::path::{Path, PathBuf};

/// Configuration for command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
    /// Whether to skip a line identical to the previous one.
    pub ignore_dups: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 500,
            ignore_dups: true,
        }
    }
}

impl HistoryConfig {
    /// Creates a new history config with the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Sets the maximum number of entries.
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    /// Sets whether consecutive duplicate lines are skipped.
    pub fn with_ignore_dups(mut self, ignore: bool) -> Self {
        self.ignore_dups = ignore;
        self
    }

    /// Applies the limits to `editor` and loads any saved history.
    pub fn load_into<H: Helper>(&self, editor: &mut Editor<H, FileHistory>) -> Result<()> {
        use rustyline::config::Configurer;

        editor.set_max_history_size(self.max_entries)?;
        editor.set_history_ignore_dups(self.ignore_dups)?;

        if self.path.exists() {
            match editor.load_history(&self.path) {
                Ok(()) => log::debug!("Loaded history from {}", self.path.display()),
                Err(e) => log::warn!("Could not load history: {}", e),
            }
        }
        Ok(())
    }

    /// Writes `editor`'s history to the configured file.
    pub fn save_from<H: Helper>(&self, editor: &mut Editor<H, FileHistory>) -> Result<()> {
        ensure_parent(&self.path)?;
        editor.save_history(&self.path)?;
        log::debug!("Saved history to {}", self.path.display());
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_default() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_entries, 500);
        assert!(config.ignore_dups);
    }

    #[test]
    fn test_history_config_builder() {
        let config = HistoryConfig::new(PathBuf::from("/tmp/history"))
            .with_max_entries(50)
            .with_ignore_dups(false);

        assert_eq!(config.path, PathBuf::from("/tmp/history"));
        assert_eq!(config.max_entries, 50);
        assert!(!config.ignore_dups);
    }

    #[test]
    fn test_ensure_parent_creates_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("history");

        ensure_parent(&path).unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
