//! Save command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to save the form as a new credential.
pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &str {
        "save"
    }

    fn aliases(&self) -> &[&str] {
        &["add", "s"]
    }

    fn description(&self) -> &str {
        "Save the form as a credential"
    }

    fn usage(&self) -> &str {
        "save"
    }

    fn help(&self) -> &str {
        "Save the website, email/username and password in the form.\n\n\
         All three fields must be filled in. The details are shown for\n\
         confirmation first. A website may hold several credentials; each\n\
         save adds one more. The form is cleared once the save is attempted.\n\n\
         Examples:\n  \
           save\n  \
           add"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let session = &mut *ctx.session;

        if let Err(e) = session.form.validate() {
            log::debug!("Save rejected: {}", e);
            return CommandResult::error(e.to_string());
        }

        let review = format!("[{}]\n{}", session.form.website, session.form.review());
        match session.prompter.confirm(&review) {
            Ok(true) => {}
            Ok(false) => return CommandResult::success("Save cancelled."),
            Err(e) => return CommandResult::error(format!("Could not read confirmation: {}", e)),
        }

        let website = session.form.website.clone();
        match session.form.submit(&session.store) {
            Ok(()) => {
                ctx.mark_modified();
                CommandResult::success(format!("Saved credential for '{}'.", website))
            }
            Err(e) => {
                log::error!("Failed to save credential for '{}': {}", website, e);
                CommandResult::error(e.to_string())
            }
        }
    }
}
