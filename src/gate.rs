//! Master password gate.
//!
//! Tracks whether a master password exists and whether the current view
//! request has been authorized. Failed verifications return to `Set` and may
//! be retried without limit; there is no lockout or throttling.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::{hash_passphrase, verify_passphrase};
use crate::error::GateError;
use crate::storage::write_atomic;

/// Contents of `config.json`.
///
/// Keys other than `master_password_hash` are kept as-is when rewriting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_password_hash: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MasterConfig {
    /// Reads the config file; missing or malformed files yield the default.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("No master password config at {}: {}", path.display(), e);
                return Self::default();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed config {}: {}", path.display(), e);
            Self::default()
        })
    }

    fn stored_hash(&self) -> Option<&str> {
        self.master_password_hash
            .as_deref()
            .filter(|hash| !hash.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No master password stored.
    Unset,
    /// The user has been asked to create one.
    AwaitingSetup,
    /// A hash is stored; nothing is authorized.
    Set,
    /// A view was requested and a passphrase is expected.
    AwaitingVerification,
    /// The passphrase matched; the viewer may be shown.
    Authorized,
}

#[derive(Debug)]
pub struct MasterGate {
    config_path: PathBuf,
    config: MasterConfig,
    state: GateState,
}

impl MasterGate {
    pub fn load(config_path: impl Into<PathBuf>) -> Self {
        let config_path = config_path.into();
        let config = MasterConfig::load(&config_path);
        let state = if config.stored_hash().is_some() {
            GateState::Set
        } else {
            GateState::Unset
        };
        log::debug!("Master password gate starts as {:?}", state);
        Self {
            config_path,
            config,
            state,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_configured(&self) -> bool {
        self.config.stored_hash().is_some()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn begin_setup(&mut self) -> Result<(), GateError> {
        if self.is_configured() {
            return Err(GateError::AlreadyConfigured);
        }
        self.expect_state(GateState::Unset)?;
        self.state = GateState::AwaitingSetup;
        Ok(())
    }

    pub fn cancel_setup(&mut self) {
        if self.state == GateState::AwaitingSetup {
            self.state = GateState::Unset;
        }
    }

    /// Stores the hash of `passphrase` once `confirmation` matches it.
    ///
    /// Validation failures keep the gate in `AwaitingSetup`.
    pub fn complete_setup(&mut self, passphrase: &str, confirmation: &str) -> Result<(), GateError> {
        self.expect_state(GateState::AwaitingSetup)?;
        if passphrase.is_empty() {
            return Err(GateError::EmptyPassphrase);
        }
        if passphrase != confirmation {
            return Err(GateError::ConfirmationMismatch);
        }

        let mut config = self.config.clone();
        config.master_password_hash = Some(hash_passphrase(passphrase));
        let json = serde_json::to_string_pretty(&config)?;
        write_atomic(&self.config_path, json.as_bytes()).map_err(|source| GateError::Write {
            path: self.config_path.clone(),
            source,
        })?;

        self.config = config;
        self.state = GateState::Set;
        log::info!("Master password configured");
        Ok(())
    }

    pub fn request_view(&mut self) -> Result<(), GateError> {
        if !self.is_configured() {
            return Err(GateError::NotConfigured);
        }
        self.expect_state(GateState::Set)?;
        self.state = GateState::AwaitingVerification;
        Ok(())
    }

    pub fn verify(&mut self, passphrase: &str) -> Result<(), GateError> {
        self.expect_state(GateState::AwaitingVerification)?;
        let matched = self
            .config
            .stored_hash()
            .is_some_and(|stored| verify_passphrase(passphrase, stored));

        if matched {
            self.state = GateState::Authorized;
            log::info!("Master password accepted");
            Ok(())
        } else {
            self.state = GateState::Set;
            log::warn!("Master password rejected");
            Err(GateError::Mismatch)
        }
    }

    /// Shorthand for `request_view` followed by `verify`.
    pub fn authorize(&mut self, passphrase: &str) -> Result<(), GateError> {
        self.request_view()?;
        self.verify(passphrase)
    }

    /// Ends an authorization; the next view must verify again.
    pub fn lock(&mut self) {
        if matches!(
            self.state,
            GateState::Authorized | GateState::AwaitingVerification
        ) {
            self.state = GateState::Set;
        }
    }

    fn expect_state(&self, expected: GateState) -> Result<(), GateError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GateError::InvalidState {
                actual: self.state,
                expected,
            })
        }
    }
}
