//! JSON persistence for the credential store.
//!
//! Reads fail soft: a missing or unparsable file is an empty store. Writes
//! replace the whole document atomically (temp file in the same directory,
//! fsync, rename), so an interrupted save never leaves a truncated file.
//!
//! A save reads strictly. An unreadable file aborts it, and a file that is
//! not valid JSON is copied aside before being replaced.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::credentials::{Credential, Credentials, validate_fields};
use crate::error::StoreError;
use crate::logging::timed;

/// Credential file backed by a JSON document on disk.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the credential document, returning an empty store on any failure.
    pub fn load(&self) -> Credentials {
        match self.read_text() {
            Ok(Some(content)) => self.parse(&content).unwrap_or_default(),
            Ok(None) => Credentials::new(),
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                Credentials::new()
            }
        }
    }

    /// Reads the document a save will append to.
    ///
    /// Only a missing file starts empty. Malformed JSON is backed up first so
    /// the replacement never destroys the only copy.
    fn load_for_update(&self) -> Result<Credentials, StoreError> {
        let content = match self.read_text() {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(Credentials::new()),
            Err(source) => {
                log::error!(
                    "Refusing to save over unreadable {}: {}",
                    self.path.display(),
                    source
                );
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match self.parse(&content) {
            Some(creds) => Ok(creds),
            None => {
                self.back_up()?;
                Ok(Credentials::new())
            }
        }
    }

    fn read_text(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No credential file at {}", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn parse(&self, content: &str) -> Option<Credentials> {
        match serde_json::from_str::<BTreeMap<String, Vec<Credential>>>(content) {
            Ok(map) => {
                let creds = Credentials::from_map(map);
                log::debug!(
                    "Loaded {} credentials from {}",
                    creds.len(),
                    self.path.display()
                );
                Some(creds)
            }
            Err(e) => {
                log::warn!(
                    "Ignoring malformed credential file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Copies the current file to `<name>.corrupt-<timestamp>`.
    fn back_up(&self) -> Result<PathBuf, StoreError> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("data.json");
        let backup = self
            .path
            .with_file_name(format!("{}.corrupt-{}", file_name, timestamp));

        fs::copy(&self.path, &backup).map_err(|source| StoreError::Write {
            path: backup.clone(),
            source,
        })?;
        log::warn!("Malformed credential file backed up to {}", backup.display());
        Ok(backup)
    }

    /// Appends one credential under `website` and rewrites the document.
    ///
    /// Nothing is read or written when a field is empty.
    pub fn save(&self, website: &str, username: &str, password: &str) -> Result<(), StoreError> {
        validate_fields(website, username, password)?;

        let mut creds = self.load_for_update()?;
        creds.add(website, username, password)?;
        self.write(&creds)?;

        log::info!("Saved credential for '{}' ({})", website, username);
        Ok(())
    }

    /// Atomically replaces the document with `creds`.
    pub fn write(&self, creds: &Credentials) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(creds)?;
        timed("credential file write", || write_atomic(&self.path, json.as_bytes())).map_err(
            |source| StoreError::Write {
                path: self.path.clone(),
                source,
            },
        )
    }
}

/// Writes `contents` to a temp file next to `path` and renames it into place.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("data.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn test_load_truncated_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"example.com": [{"username": "a@b.c"#).unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("example.com", "a@b.com", "xyz").unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            on_disk,
            serde_json::json!({"example.com": [{"username": "a@b.com", "password": "xyz"}]})
        );
    }

    #[test]
    fn test_save_rejects_empty_field_without_touching_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("w", "u", "p").unwrap();
        let before = fs::read(store.path()).unwrap();

        assert!(store.save("", "u", "p").is_err());
        assert!(store.save("w", "", "p").is_err());
        assert!(store.save("w", "u", "").is_err());

        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let store = CredentialStore::new(dir.path().to_path_buf());

        let result = store.save("w", "u", "p");
        assert!(matches!(result, Err(StoreError::Write { .. })));
    }

    #[test]
    fn test_load_non_utf8_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"{\"bank.com\": [{\"username\": \"me\", \"password\": \"caf\xE9\"}]}")
            .unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_over_non_utf8_file_keeps_it() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let original: &[u8] = b"{\"bank.com\": [{\"username\": \"me\", \"password\": \"caf\xE9\"}], \
            \"mail.com\": [{\"username\": \"me\", \"password\": \"p\"}]}";
        fs::write(store.path(), original).unwrap();

        let result = store.save("new.com", "u", "p");

        assert!(matches!(result, Err(StoreError::Read { .. })));
        assert_eq!(fs::read(store.path()).unwrap(), original);
    }

    #[test]
    fn test_save_over_malformed_json_backs_it_up() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let original = r#"{"bank.com": [{"username": "me""#;
        fs::write(store.path(), original).unwrap();

        store.save("new.com", "u", "p").unwrap();

        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("data.json.corrupt-"))
            })
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), original);
        assert_eq!(store.load().websites().collect::<Vec<_>>(), vec!["new.com"]);
    }

    #[test]
    fn test_write_atomic_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("file.json");

        write_atomic(&path, b"{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
