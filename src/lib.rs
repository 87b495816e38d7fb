//! Passkeep - a local password manager library.
//!
//! Generates random passwords, appends website/username/password records to a
//! JSON credential file, and shows them back after a master password check.
//! Credentials are stored in plain JSON and the master password is an unsalted
//! SHA-256 digest; this is a convenience tool, not an encrypted vault.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod credentials;
pub mod crypto;
pub mod error;
pub mod form;
pub mod gate;
pub mod generator;
pub mod logging;
pub mod session;
pub mod shell;
pub mod storage;
pub mod viewer;

// Re-export commonly used types
pub use config::AppConfig;
pub use credentials::{Credential, Credentials, Row};
pub use error::{ClipboardError, GateError, StoreError};
pub use form::FormState;
pub use gate::{GateState, MasterGate};
pub use logging::{LogConfig, init_logging};
pub use session::Session;
pub use shell::Shell;
pub use storage::CredentialStore;
