//! State shared by shell commands.

use std::collections::BTreeSet;

use crate::clipboard::Clipboard;
use crate::config::AppConfig;
use crate::credentials::Row;
use crate::form::FormState;
use crate::gate::MasterGate;
use crate::shell::prompt::Prompter;
use crate::storage::CredentialStore;

/// Everything a command can read or change: the entry form, the credential
/// store, the master password gate, the clipboard, the prompter and the rows
/// from the last authorized view.
pub struct Session {
    pub form: FormState,
    pub store: CredentialStore,
    pub gate: MasterGate,
    pub clipboard: Box<dyn Clipboard>,
    pub prompter: Box<dyn Prompter>,
    /// Rows shown by the last successful `view`, for `copy`.
    pub viewed: Vec<Row>,
}

impl Session {
    pub fn new(
        store: CredentialStore,
        gate: MasterGate,
        clipboard: Box<dyn Clipboard>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            form: FormState::new(),
            store,
            gate,
            clipboard,
            prompter,
            viewed: Vec::new(),
        }
    }

    /// Opens the store and gate files named by `config`.
    pub fn open(
        config: &AppConfig,
        clipboard: Box<dyn Clipboard>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self::new(
            CredentialStore::new(config.data_path()),
            MasterGate::load(config.config_path()),
            clipboard,
            prompter,
        )
    }

    /// Website names currently on disk.
    pub fn website_names(&self) -> BTreeSet<String> {
        self.store.load().websites().map(str::to_string).collect()
    }
}
