//! View command implementation.

use anyhow::Result;

use crate::session::Session;
use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::viewer::{open_viewer, render_table};

/// Command to show all stored credentials after the master password check.
pub struct ViewCommand;

/// Creates the master password, cancelling the setup on any failure.
fn set_up_master_password(session: &mut Session) -> Result<()> {
    session.gate.begin_setup()?;
    let result = prompt_new_master_password(session);
    if result.is_err() {
        session.gate.cancel_setup();
    }
    result
}

fn prompt_new_master_password(session: &mut Session) -> Result<()> {
    let first = session
        .prompter
        .secret("No master password yet. Create one: ")?;
    let confirmation = session.prompter.secret("Confirm master password: ")?;
    session.gate.complete_setup(&first, &confirmation)?;
    Ok(())
}

impl Command for ViewCommand {
    fn name(&self) -> &str {
        "view"
    }

    fn aliases(&self) -> &[&str] {
        &["list", "ls"]
    }

    fn description(&self) -> &str {
        "View stored credentials"
    }

    fn usage(&self) -> &str {
        "view"
    }

    fn help(&self) -> &str {
        "Ask for the master password and list every stored credential.\n\n\
         The first time, a master password is created instead. Each view\n\
         asks again. Use 'copy <#>' afterwards to copy a row's password.\n\n\
         Examples:\n  \
           view\n  \
           ls"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let session = &mut *ctx.session;
        session.viewed.clear();

        let mut notes = String::new();
        if !session.gate.is_configured() {
            if let Err(e) = set_up_master_password(session) {
                return CommandResult::error(e.to_string());
            }
            notes.push_str("Master password created.\n");
        }

        let passphrase = match session.prompter.secret("Master password: ") {
            Ok(passphrase) => passphrase,
            Err(e) => return CommandResult::error(e.to_string()),
        };

        match open_viewer(&mut session.gate, &session.store, &passphrase) {
            Ok(rows) if rows.is_empty() => {
                CommandResult::success(format!("{}No credentials stored.", notes))
            }
            Ok(rows) => {
                let table = render_table(&rows);
                session.viewed = rows;
                CommandResult::success(format!(
                    "{}{}\n\nType 'copy <#>' to copy a password.",
                    notes, table
                ))
            }
            Err(e) => CommandResult::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateState;
    use crate::shell::commands::testing;
    use crate::shell::prompt::ScriptedPrompter;
    use tempfile::TempDir;

    #[test]
    fn test_view_first_time_sets_up_then_lists() {
        let dir = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new()
            .with_secret("master")
            .with_secret("master")
            .with_secret("master");
        let (mut session, _) = testing::session(&dir, prompter);
        session.store.save("example.com", "a@b.com", "xyz").unwrap();
        let mut ctx = ShellContext::new(&mut session);

        match ViewCommand.execute(&[], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("Master password created"));
                assert!(msg.contains("example.com"));
                assert!(msg.contains("xyz"));
            }
            other => panic!("Expected table, got {:?}", other),
        }
        assert_eq!(session.viewed.len(), 1);
        assert_eq!(session.gate.state(), GateState::Set);
    }

    #[test]
    fn test_view_setup_mismatch() {
        let dir = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new().with_secret("one").with_secret("two");
        let (mut session, _) = testing::session(&dir, prompter);
        let mut ctx = ShellContext::new(&mut session);

        let result = ViewCommand.execute(&[], &mut ctx);

        assert!(matches!(result, CommandResult::Error(_)));
        assert_eq!(session.gate.state(), GateState::Unset);
        assert!(!session.gate.config_path().exists());
    }

    #[test]
    fn test_view_wrong_passphrase() {
        let dir = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new()
            .with_secret("master")
            .with_secret("master")
            .with_secret("wrong");
        let (mut session, _) = testing::session(&dir, prompter);
        session.store.save("example.com", "a@b.com", "xyz").unwrap();
        let mut ctx = ShellContext::new(&mut session);

        match ViewCommand.execute(&[], &mut ctx) {
            CommandResult::Error(msg) => assert!(msg.contains("Incorrect")),
            other => panic!("Expected error, got {:?}", other),
        }
        assert!(session.viewed.is_empty());
        assert_eq!(session.gate.state(), GateState::Set);
    }

    #[test]
    fn test_view_empty_store() {
        let dir = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new()
            .with_secret("m")
            .with_secret("m")
            .with_secret("m");
        let (mut session, _) = testing::session(&dir, prompter);
        let mut ctx = ShellContext::new(&mut session);

        match ViewCommand.execute(&[], &mut ctx) {
            CommandResult::Success(Some(msg)) => assert!(msg.contains("No credentials stored")),
            other => panic!("Expected empty notice, got {:?}", other),
        }
    }
}
