//! Inline usage hints.

use rustyline::Context;
use rustyline::hint::Hinter;
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

/// Hinter that completes unambiguous command names and shows missing
/// arguments.
pub struct PasskeepHinter {
    registry: Arc<CommandRegistry>,
}

impl PasskeepHinter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    fn get_hint(&self, line: &str) -> Option<String> {
        let has_trailing_space = line.ends_with(' ');
        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = *parts.first()?;

        if parts.len() == 1 && !has_trailing_space {
            let completions = self.registry.completions(command);
            return match completions.as_slice() {
                [only] if only.len() > command.len() => Some(only[command.len()..].to_string()),
                _ => None,
            };
        }

        let cmd = self.registry.get(command)?;
        let arg_count = parts.len() - 1;
        if arg_count >= cmd.min_args() {
            return None;
        }

        let expected: Vec<&str> = cmd
            .usage()
            .split_whitespace()
            .skip(1 + arg_count)
            .collect();
        if expected.is_empty() {
            return None;
        }
        let sep = if has_trailing_space { "" } else { " " };
        Some(format!("{}{}", sep, expected.join(" ")))
    }
}

impl Hinter for PasskeepHinter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }
        self.get_hint(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::register_all;

    fn setup_hinter() -> PasskeepHinter {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        PasskeepHinter::new(Arc::new(registry))
    }

    #[test]
    fn test_command_completion_hint() {
        let hinter = setup_hinter();
        assert_eq!(hinter.get_hint("webs"), Some("ite".to_string()));
        // "ge" is ambiguous between gen and generate
        assert_eq!(hinter.get_hint("ge"), None);
    }

    #[test]
    fn test_missing_argument_hint() {
        let hinter = setup_hinter();
        assert_eq!(hinter.get_hint("website "), Some("<name>".to_string()));
        assert_eq!(hinter.get_hint("copy"), None);
        assert_eq!(hinter.get_hint("copy "), Some("<row>".to_string()));
    }

    #[test]
    fn test_no_hint_when_args_complete() {
        let hinter = setup_hinter();
        assert!(hinter.get_hint("website example.com").is_none());
        assert!(hinter.get_hint("save ").is_none());
    }

    #[test]
    fn test_empty_line_no_hint() {
        let hinter = setup_hinter();
        assert!(hinter.get_hint("").is_none());
        assert!(hinter.get_hint("   ").is_none());
    }
}
