//! Error types for the credential store, the master password gate and the
//! clipboard.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::gate::GateState;

/// A required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Website,
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Website => "website",
            Field::Username => "email/username",
            Field::Password => "password",
        };
        f.write_str(name)
    }
}

/// Errors raised while saving credentials.
///
/// Plain reads never fail: a missing or corrupt credential file loads as an
/// empty store. A save refuses to overwrite a file it could not read.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Please make sure you haven't left any fields empty ({0} is empty).")]
    EmptyField(Field),

    #[error("Could not read {}, nothing was saved: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not save to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode credential store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised by the master password gate.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Master password cannot be empty")]
    EmptyPassphrase,

    #[error("Passwords do not match")]
    ConfirmationMismatch,

    #[error("Incorrect master password")]
    Mismatch,

    #[error("No master password has been set up")]
    NotConfigured,

    #[error("A master password is already configured")]
    AlreadyConfigured,

    #[error("Master password gate is {actual:?}, expected {expected:?}")]
    InvalidState {
        actual: GateState,
        expected: GateState,
    },

    #[error("Could not save master password to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode master password config: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Could not copy to clipboard: {0}")]
    Write(String),
}
