//! Logging setup for passkeep.
//!
//! Writes timestamped records to a log file in the data directory and echoes
//! warnings to the terminal. Secrets (passwords, master passphrase) are never
//! passed to the logger.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path to the log file.
    pub path: PathBuf,
    /// Minimum level written to the file.
    pub level: LevelFilter,
    /// Size in bytes above which the file is rotated at startup (0 = never).
    pub max_size: u64,
    /// Whether warnings are echoed to the terminal.
    pub echo_warnings: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("passkeep.log"),
            level: LevelFilter::Info,
            max_size: 5 * 1024 * 1024,
            echo_warnings: true,
        }
    }
}

impl LogConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_echo_warnings(mut self, echo: bool) -> Self {
        self.echo_warnings = echo;
        self
    }
}

/// Installs the global logger.
///
/// Can only succeed once per process.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if needs_rotation(&config.path, config.max_size) {
        rotate_log(&config.path)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| anyhow!("Failed to open log file: {}", e))?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![];
    loggers.push(WriteLogger::new(config.level, file_config, log_file));

    if config.echo_warnings && std::io::stderr().is_terminal() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    log::info!("Logging initialized at level {:?}", config.level);
    log::debug!("Log file: {}", config.path.display());
    Ok(())
}

fn needs_rotation(path: &Path, max_size: u64) -> bool {
    max_size > 0
        && std::fs::metadata(path)
            .map(|m| m.len() > max_size)
            .unwrap_or(false)
}

/// Renames the log file with a timestamp suffix.
fn rotate_log(path: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("passkeep.log");
    let rotated = path.with_file_name(format!("{}.{}", file_name, timestamp));
    std::fs::rename(path, &rotated)?;
    Ok(rotated)
}

/// Runs `f` and logs how long it took at debug level.
pub fn timed<T, F: FnOnce() -> T>(operation: &str, f: F) -> T {
    let start = std::time::Instant::now();
    let result = f();
    log::debug!("{} completed in {:?}", operation, start.elapsed());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new(PathBuf::from("/tmp/pk.log"))
            .with_level(LevelFilter::Trace)
            .with_max_size(1024)
            .with_echo_warnings(false);

        assert_eq!(config.path, PathBuf::from("/tmp/pk.log"));
        assert_eq!(config.level, LevelFilter::Trace);
        assert_eq!(config.max_size, 1024);
        assert!(!config.echo_warnings);
    }

    #[test]
    fn test_rotation_threshold() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pk.log");
        std::fs::write(&path, vec![b'x'; 64]).unwrap();

        assert!(needs_rotation(&path, 32));
        assert!(!needs_rotation(&path, 128));
        assert!(!needs_rotation(&path, 0));
        assert!(!needs_rotation(&dir.path().join("missing.log"), 1));
    }

    #[test]
    fn test_rotate_log_moves_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pk.log");
        std::fs::write(&path, "old").unwrap();

        let rotated = rotate_log(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(std::fs::read_to_string(rotated).unwrap(), "old");
    }

    #[test]
    fn test_timed_returns_value() {
        assert_eq!(timed("answer", || 42), 42);
    }
}
