//! Password field command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to set the password field, typed inline or at a masked prompt.
pub struct PasswordCommand;

impl Command for PasswordCommand {
    fn name(&self) -> &str {
        "password"
    }

    fn aliases(&self) -> &[&str] {
        &["pw", "pass"]
    }

    fn description(&self) -> &str {
        "Set the password field"
    }

    fn usage(&self) -> &str {
        "password [value]"
    }

    fn help(&self) -> &str {
        "Set the password of the next saved credential.\n\n\
         Without an argument the password is read at a masked prompt.\n\
         An inline value is taken as typed, spaces included.\n\
         Lines that pass the password inline are not written to history.\n\n\
         Examples:\n  \
           password\n  \
           pw s3cret!"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let password = if args.is_empty() {
            match ctx.session.prompter.secret("Password: ") {
                Ok(password) => password,
                Err(e) => return CommandResult::error(e.to_string()),
            }
        } else {
            args.join(" ")
        };

        let len = password.chars().count();
        ctx.session.form.password = password;
        CommandResult::success(format!("Password set ({} characters)", len))
    }

    fn sensitive_args(&self) -> bool {
        true
    }

    fn raw_args(&self) -> bool {
        true
    }
}
