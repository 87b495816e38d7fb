//! Copy command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to copy a password from the last view to the clipboard.
pub struct CopyCommand;

impl Command for CopyCommand {
    fn name(&self) -> &str {
        "copy"
    }

    fn aliases(&self) -> &[&str] {
        &["cp", "c"]
    }

    fn description(&self) -> &str {
        "Copy a password from the last view"
    }

    fn usage(&self) -> &str {
        "copy <row>"
    }

    fn help(&self) -> &str {
        "Copy the password of one row of the last 'view' table to the\n\
         clipboard.\n\n\
         Arguments:\n  \
           <row> - Row number shown in the '#' column\n\n\
         Examples:\n  \
           copy 2\n  \
           cp 1"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let Some(arg) = args.first() else {
            return CommandResult::error(format!("Usage: {}\nMissing row number", self.usage()));
        };

        let session = &mut *ctx.session;
        if session.viewed.is_empty() {
            return CommandResult::error("Nothing to copy. Run 'view' first.");
        }

        let row = match arg.parse::<usize>() {
            Ok(n) if n >= 1 => session.viewed.get(n - 1),
            _ => None,
        };
        let Some(row) = row else {
            return CommandResult::error(format!(
                "No row '{}'. Pick a number from 1 to {}.",
                arg,
                session.viewed.len()
            ));
        };

        match session.clipboard.copy(&row.password) {
            Ok(()) => {
                log::info!("Copied password for '{}' to the clipboard", row.website);
                CommandResult::success(format!(
                    "Copied password for {} ({}) to clipboard.",
                    row.website, row.username
                ))
            }
            Err(e) => CommandResult::error(e.to_string()),
        }
    }

    fn min_args(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Row;
    use crate::shell::commands::testing;
    use crate::shell::prompt::ScriptedPrompter;
    use tempfile::TempDir;

    fn viewed_rows() -> Vec<Row> {
        vec![
            Row {
                website: "a.com".to_string(),
                username: "u1".to_string(),
                password: "p1".to_string(),
            },
            Row {
                website: "b.com".to_string(),
                username: "u2".to_string(),
                password: "p2".to_string(),
            },
        ]
    }

    #[test]
    fn test_copy_selected_row() {
        let dir = TempDir::new().unwrap();
        let (mut session, clipboard) = testing::session(&dir, ScriptedPrompter::new());
        session.viewed = viewed_rows();
        let mut ctx = ShellContext::new(&mut session);

        let result = CopyCommand.execute(&["2"], &mut ctx);

        assert!(matches!(result, CommandResult::Success(_)));
        assert_eq!(clipboard.contents().as_deref(), Some("p2"));
    }

    #[test]
    fn test_copy_without_view() {
        let dir = TempDir::new().unwrap();
        let (mut session, clipboard) = testing::session(&dir, ScriptedPrompter::new());
        let mut ctx = ShellContext::new(&mut session);

        let result = CopyCommand.execute(&["1"], &mut ctx);

        assert!(matches!(result, CommandResult::Error(_)));
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_copy_out_of_range() {
        let dir = TempDir::new().unwrap();
        let (mut session, _) = testing::session(&dir, ScriptedPrompter::new());
        session.viewed = viewed_rows();
        let mut ctx = ShellContext::new(&mut session);

        assert!(matches!(CopyCommand.execute(&["0"], &mut ctx), CommandResult::Error(_)));
        assert!(matches!(CopyCommand.execute(&["3"], &mut ctx), CommandResult::Error(_)));
        assert!(matches!(CopyCommand.execute(&["x"], &mut ctx), CommandResult::Error(_)));
    }
}
