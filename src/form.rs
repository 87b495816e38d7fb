//! Entry form state.
//!
//! Holds the website, username and password fields between commands and
//! drives the generate and save actions.

use crate::clipboard::Clipboard;
use crate::credentials::validate_fields;
use crate::error::{ClipboardError, StoreError};
use crate::generator::generate_password;
use crate::storage::CredentialStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub website: String,
    pub username: String,
    pub password: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the password field with a generated one and copies it.
    ///
    /// The field is filled even when the clipboard copy fails.
    pub fn generate_password(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        self.password = generate_password();
        clipboard.copy(&self.password)
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        validate_fields(&self.website, &self.username, &self.password)
    }

    /// Text shown before a save is confirmed.
    pub fn review(&self) -> String {
        format!(
            "These are the details entered:\nEmail: {}\nPassword: {}\nIs it ok to save?",
            self.username, self.password
        )
    }

    /// Saves the current fields to `store`.
    ///
    /// A validation failure, or a credential file that could not be read,
    /// leaves the fields as they are. Once a write is attempted the fields
    /// are cleared, whether it succeeded or not.
    pub fn submit(&mut self, store: &CredentialStore) -> Result<(), StoreError> {
        self.validate()?;
        let result = store.save(&self.website, &self.username, &self.password);
        if !matches!(result, Err(StoreError::Read { .. })) {
            self.clear();
        }
        result
    }

    pub fn clear(&mut self) {
        self.website.clear();
        self.username.clear();
        self.password.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.website.is_empty() && self.username.is_empty() && self.password.is_empty()
    }
}
