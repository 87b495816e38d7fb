//! Form display command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to show the current form fields.
pub struct FormCommand;

fn field(value: &str) -> &str {
    if value.is_empty() { "(empty)" } else { value }
}

impl Command for FormCommand {
    fn name(&self) -> &str {
        "form"
    }

    fn aliases(&self) -> &[&str] {
        &["show", "status"]
    }

    fn description(&self) -> &str {
        "Show the current form"
    }

    fn usage(&self) -> &str {
        "form"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let form = &ctx.session.form;
        let masked = "*".repeat(form.password.chars().count());

        CommandResult::success(format!(
            "Website:        {}\nEmail/Username: {}\nPassword:       {}",
            field(&form.website),
            field(&form.username),
            field(&masked)
        ))
    }
}
