//! Clear command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to empty all form fields.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn aliases(&self) -> &[&str] {
        &["reset"]
    }

    fn description(&self) -> &str {
        "Clear the form"
    }

    fn usage(&self) -> &str {
        "clear"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        ctx.session.form.clear();
        CommandResult::success("Form cleared.")
    }
}
