//! Quit command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to exit the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }

    fn description(&self) -> &str {
        "Exit the password manager"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        ctx.session.viewed.clear();
        ctx.session.form.clear();
        CommandResult::Exit
    }
}
