//! Generate command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to fill the password field with a generated password.
pub struct GenerateCommand;

impl Command for GenerateCommand {
    fn name(&self) -> &str {
        "generate"
    }

    fn aliases(&self) -> &[&str] {
        &["gen", "g"]
    }

    fn description(&self) -> &str {
        "Generate a password and copy it"
    }

    fn usage(&self) -> &str {
        "generate"
    }

    fn help(&self) -> &str {
        "Generate a random password of 12 to 16 characters (letters,\n\
         digits and the symbols !#$%&()*+), put it in the password field\n\
         and copy it to the clipboard.\n\n\
         Examples:\n  \
           generate\n  \
           gen"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let session = &mut *ctx.session;
        let copied = session.form.generate_password(session.clipboard.as_mut());
        let password = &session.form.password;

        match copied {
            Ok(()) => {
                log::info!("Generated password and copied it to the clipboard");
                CommandResult::success(format!("Password: {}\nCopied to clipboard.", password))
            }
            Err(e) => {
                log::warn!("Generated password but could not copy it: {}", e);
                CommandResult::success(format!("Password: {}\n{}", password, e))
            }
        }
    }
}
