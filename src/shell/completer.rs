//! Tab completion for command names and stored website names.

use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::shell::command::{ArgKind, CommandRegistry, complete_prefix};

/// Completer that handles both command and argument completion.
pub struct PasskeepCompleter {
    registry: Arc<CommandRegistry>,
    /// Website names from the credential store, refreshed after saves.
    websites: Arc<RwLock<BTreeSet<String>>>,
}

/// What the cursor is on.
#[derive(Debug, PartialEq, Eq)]
enum CompletionContext<'a> {
    Command {
        partial: &'a str,
    },
    Argument {
        command: &'a str,
        arg_index: usize,
        partial: &'a str,
    },
}

fn to_pairs(words: Vec<String>) -> Vec<Pair> {
    words
        .into_iter()
        .map(|s| Pair {
            display: s.clone(),
            replacement: s,
        })
        .collect()
}

impl PasskeepCompleter {
    pub fn new(registry: Arc<CommandRegistry>, websites: Arc<RwLock<BTreeSet<String>>>) -> Self {
        Self { registry, websites }
    }

    fn complete_command(&self, partial: &str) -> Vec<Pair> {
        to_pairs(self.registry.completions(partial))
    }

    fn complete_website(&self, partial: &str) -> Vec<Pair> {
        match self.websites.read() {
            Ok(websites) => to_pairs(complete_prefix(&websites, partial)),
            Err(_) => vec![],
        }
    }

    fn parse_context<'a>(&self, line: &'a str, pos: usize) -> CompletionContext<'a> {
        let line_to_pos = line.get(..pos).unwrap_or(line);
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let ends_with_space = line_to_pos.ends_with(char::is_whitespace);

        match parts.as_slice() {
            [] => CompletionContext::Command { partial: "" },
            [command] if !ends_with_space => CompletionContext::Command { partial: *command },
            [command, rest @ ..] => {
                let (arg_index, partial) = match rest.last() {
                    Some(last) if !ends_with_space => (rest.len() - 1, *last),
                    _ => (rest.len(), ""),
                };
                CompletionContext::Argument {
                    command: *command,
                    arg_index,
                    partial,
                }
            }
        }
    }
}

impl Completer for PasskeepCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match self.parse_context(line, pos) {
            CompletionContext::Command { partial } => {
                Ok((pos - partial.len(), self.complete_command(partial)))
            }
            CompletionContext::Argument {
                command,
                arg_index,
                partial,
            } => {
                let kind = self
                    .registry
                    .get(command)
                    .map_or(ArgKind::None, |cmd| cmd.arg_kind());
                let completions = match (kind, arg_index) {
                    (ArgKind::Website, 0) => self.complete_website(partial),
                    (ArgKind::Command, 0) => self.complete_command(partial),
                    _ => vec![],
                };
                Ok((pos - partial.len(), completions))
            }
        }
    }
}
