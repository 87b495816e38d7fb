//! Website field command.

use crate::shell::command::{ArgKind, Command, CommandResult, ShellContext};

/// Command to set the website field of the form.
pub struct WebsiteCommand;

impl Command for WebsiteCommand {
    fn name(&self) -> &str {
        "website"
    }

    fn aliases(&self) -> &[&str] {
        &["web", "w"]
    }

    fn description(&self) -> &str {
        "Set the website field"
    }

    fn usage(&self) -> &str {
        "website <name>"
    }

    fn help(&self) -> &str {
        "Set the website the next saved credential belongs to.\n\n\
         Arguments:\n  \
           <name> - Website name; existing names complete with TAB\n\n\
         Examples:\n  \
           website example.com\n  \
           w github.com"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!(
                "Usage: {}\nMissing website name",
                self.usage()
            ));
        }

        let website = args.join(" ");
        log::debug!("Form website set to '{}'", website);
        ctx.session.form.website = website;
        CommandResult::success(format!("Website: {}", ctx.session.form.website))
    }

    fn arg_kind(&self) -> ArgKind {
        ArgKind::Website
    }

    fn raw_args(&self) -> bool {
        true
    }

    fn min_args(&self) -> usize {
        1
    }
}
