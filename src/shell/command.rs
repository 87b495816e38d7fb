//! Command trait and registry for the shell.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::session::Session;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Command executed successfully with optional message.
    Success(Option<String>),
    /// Command failed with error message.
    Error(String),
    /// Signal to exit the shell.
    Exit,
    /// Continue without output.
    Continue,
}

impl CommandResult {
    /// Creates a success result with a message.
    pub fn success(msg: impl Into<String>) -> Self {
        CommandResult::Success(Some(msg.into()))
    }

    /// Creates a success result without output.
    pub fn ok() -> Self {
        CommandResult::Success(None)
    }

    /// Creates an error result.
    pub fn error(msg: impl Into<String>) -> Self {
        CommandResult::Error(msg.into())
    }
}

/// What a command's first argument refers to, for completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    None,
    Website,
    Command,
}

/// Context available to commands during execution.
pub struct ShellContext<'a> {
    pub session: &'a mut Session,
    /// Set when the credential file was written.
    pub modified: bool,
    /// Command registry, for `help`.
    pub registry: Option<&'a CommandRegistry>,
}

impl<'a> ShellContext<'a> {
    /// Creates a new shell context.
    pub fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            modified: false,
            registry: None,
        }
    }

    /// Sets the registry reference for help command.
    pub fn with_registry(mut self, registry: &'a CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Marks the credential file as written.
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }
}

/// A command that can be executed in the shell.
pub trait Command: Send + Sync {
    /// Returns the primary name of the command.
    fn name(&self) -> &str;

    /// Returns command aliases (alternative names).
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Returns a short description of the command.
    fn description(&self) -> &str;

    /// Returns usage information (e.g., "website <name>").
    fn usage(&self) -> &str;

    /// Returns detailed help text.
    fn help(&self) -> &str {
        self.description()
    }

    /// Executes the command with the given arguments.
    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult;

    fn arg_kind(&self) -> ArgKind {
        ArgKind::None
    }

    /// True when arguments may contain secrets. Such lines are kept out of
    /// history and dimmed while typing.
    fn sensitive_args(&self) -> bool {
        false
    }

    /// True when the text after the command name is one free-text value.
    /// It is then passed as a single argument with its spacing intact.
    fn raw_args(&self) -> bool {
        false
    }

    /// Returns the minimum number of required arguments.
    fn min_args(&self) -> usize {
        0
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("description", &self.description())
            .finish()
    }
}

/// Returns the entries of `set` starting with `prefix`, in order.
pub fn complete_prefix(set: &BTreeSet<String>, prefix: &str) -> Vec<String> {
    set.range(prefix.to_string()..)
        .take_while(|s| s.starts_with(prefix))
        .cloned()
        .collect()
}

/// Registry of all available commands.
#[derive(Default)]
pub struct CommandRegistry {
    /// Commands indexed by their primary name.
    commands: HashMap<String, Arc<dyn Command>>,
    /// Alias to primary name mapping.
    aliases: HashMap<String, String>,
    /// Names and aliases, sorted for completion.
    names: BTreeSet<String>,
}

impl CommandRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its name and aliases.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        self.names.insert(name.clone());

        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
            self.names.insert(alias.to_string());
        }

        self.commands.insert(name, command);
    }

    /// Looks up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(Arc::clone(cmd));
        }

        self.aliases
            .get(name)
            .and_then(|primary| self.commands.get(primary))
            .map(Arc::clone)
    }

    /// Returns all registered commands.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Returns command names and aliases starting with `prefix`.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        complete_prefix(&self.names, prefix)
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true when no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCommand;

    impl Command for TestCommand {
        fn name(&self) -> &str {
            "test"
        }

        fn aliases(&self) -> &[&str] {
            &["t", "tst"]
        }

        fn description(&self) -> &str {
            "A test command"
        }

        fn usage(&self) -> &str {
            "test [args...]"
        }

        fn execute(&self, args: &[&str], _ctx: &mut ShellContext) -> CommandResult {
            if args.is_empty() {
                CommandResult::ok()
            } else {
                CommandResult::success(format!("Args: {:?}", args))
            }
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TestCommand));

        assert!(registry.get("test").is_some());
        assert!(registry.get("tst").is_some());
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_completions_include_aliases() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TestCommand));

        assert_eq!(registry.completions("te"), vec!["test"]);
        assert_eq!(registry.completions("t"), vec!["t", "test", "tst"]);
        assert!(registry.completions("x").is_empty());
    }

    #[test]
    fn test_complete_prefix() {
        let set: BTreeSet<String> = ["github.com", "gitlab.com", "mail.com"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(complete_prefix(&set, "git"), vec!["github.com", "gitlab.com"]);
        assert_eq!(complete_prefix(&set, "").len(), 3);
        assert!(complete_prefix(&set, "z").is_empty());
    }
}
