//! Username field command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to set the email/username field of the form.
pub struct UserCommand;

impl Command for UserCommand {
    fn name(&self) -> &str {
        "user"
    }

    fn aliases(&self) -> &[&str] {
        &["email", "u"]
    }

    fn description(&self) -> &str {
        "Set the email/username field"
    }

    fn usage(&self) -> &str {
        "user <email/username>"
    }

    fn help(&self) -> &str {
        "Set the email or username of the next saved credential.\n\n\
         Examples:\n  \
           user alice@example.com\n  \
           email alice"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!(
                "Usage: {}\nMissing email/username",
                self.usage()
            ));
        }

        ctx.session.form.username = args.join(" ");
        log::debug!("Form username set");
        CommandResult::success(format!("Email/Username: {}", ctx.session.form.username))
    }

    fn min_args(&self) -> usize {
        1
    }

    fn raw_args(&self) -> bool {
        true
    }
}
