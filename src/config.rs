use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "PASSKEEP_HOME";

const DATA_FILE: &str = "data.json";
const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history";
const LOG_FILE: &str = "passkeep.log";

/// Locations of everything passkeep reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Picks the data directory: explicit override, then `$PASSKEEP_HOME`,
    /// then `~/.passkeep`.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = data_dir {
            return Ok(Self::new(dir));
        }
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(dir));
        }
        dirs_next::home_dir()
            .map(|home| Self::new(home.join(".passkeep")))
            .ok_or_else(|| anyhow!("Could not determine home directory"))
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<&Path> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)?;
        }
        Ok(&self.data_dir)
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let config = AppConfig::resolve(Some(PathBuf::from("/tmp/pk"))).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pk"));
        assert_eq!(config.data_path(), PathBuf::from("/tmp/pk/data.json"));
        assert_eq!(config.config_path(), PathBuf::from("/tmp/pk/config.json"));
    }

    #[test]
    fn test_ensure_dir_creates_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = AppConfig::new(temp.path().join("a").join("b"));

        config.ensure_dir().unwrap();
        assert!(config.data_dir.is_dir());
    }
}
