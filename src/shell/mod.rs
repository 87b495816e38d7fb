//! Shell module - rustyline-based interactive front end.
//!
//! The shell stands in for the entry form: one command per field
//! (`website`, `user`, `password`), one per button (`generate`, `save`,
//! `view`) and `copy` for picking a row out of the credential table. It
//! provides:
//! - Command and website name completion
//! - Syntax highlighting
//! - Command history (secret-bearing lines excluded)
//! - Usage hints

pub mod command;
pub mod commands;
pub mod completer;
pub mod highlighter;
pub mod hints;
pub mod history;
pub mod prompt;

use anyhow::{Result, anyhow};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::clipboard::exit_notice;
use crate::session::Session;

use command::{CommandRegistry, CommandResult, ShellContext};
use commands::register_all;
use completer::PasskeepCompleter;
use highlighter::{OutputHighlighter, PasskeepHighlighter};
use hints::PasskeepHinter;
use history::HistoryConfig;

/// The prompt displayed to the user.
const PROMPT: &str = "passkeep> ";

/// Combined helper for rustyline that provides all shell features.
pub struct PasskeepHelper {
    completer: PasskeepCompleter,
    highlighter: PasskeepHighlighter,
    hinter: PasskeepHinter,
}

impl PasskeepHelper {
    pub fn new(registry: Arc<CommandRegistry>, websites: Arc<RwLock<BTreeSet<String>>>) -> Self {
        Self {
            completer: PasskeepCompleter::new(Arc::clone(&registry), websites),
            highlighter: PasskeepHighlighter::new(Arc::clone(&registry)),
            hinter: PasskeepHinter::new(registry),
        }
    }
}

impl Completer for PasskeepHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for PasskeepHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        self.highlighter.highlight_prompt(prompt, default)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        self.highlighter.highlight_hint(hint)
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        self.highlighter.highlight_candidate(candidate, completion)
    }

    fn highlight_char(&self, line: &str, pos: usize, kind: rustyline::highlight::CmdKind) -> bool {
        self.highlighter.highlight_char(line, pos, kind)
    }
}

impl Hinter for PasskeepHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

// Lines are accepted as typed: passwords may hold unbalanced brackets.
impl Validator for PasskeepHelper {}

impl Helper for PasskeepHelper {}

/// Configuration for the shell.
pub struct ShellConfig {
    pub history: HistoryConfig,
    /// Whether to show the welcome message.
    pub show_welcome: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            show_welcome: true,
        }
    }
}

/// The interactive shell.
pub struct Shell {
    registry: Arc<CommandRegistry>,
    /// Website names for completion (shared with the helper).
    websites: Arc<RwLock<BTreeSet<String>>>,
    config: ShellConfig,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self {
            registry: Arc::new(registry),
            websites: Arc::new(RwLock::new(BTreeSet::new())),
            config,
        }
    }

    fn refresh_websites(&self, session: &Session) {
        if let Ok(mut websites) = self.websites.write() {
            *websites = session.website_names();
            log::debug!("Website completion list has {} entries", websites.len());
        }
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    pub fn run(&self, session: &mut Session) -> Result<()> {
        self.refresh_websites(session);

        let helper = PasskeepHelper::new(Arc::clone(&self.registry), Arc::clone(&self.websites));
        let mut editor: Editor<PasskeepHelper, FileHistory> = Editor::new()?;
        editor.set_helper(Some(helper));
        self.config.history.load_into(&mut editor)?;

        if self.config.show_welcome {
            println!("Password manager ready. Type 'help' for available commands.");
            if !session.gate.is_configured() {
                println!(
                    "{}",
                    OutputHighlighter::warning(
                        "No master password yet; 'view' will ask you to create one."
                    )
                );
            }
        }

        log::info!("Shell started");

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let line = line.trim_start();

                    if self.should_record(line) {
                        let _ = editor.add_history_entry(line);
                    }

                    let (result, modified) = self.execute_line(line, session);
                    if modified {
                        self.refresh_websites(session);
                    }

                    match result {
                        CommandResult::Success(Some(msg)) => println!("{}", msg),
                        CommandResult::Success(None) | CommandResult::Continue => {}
                        CommandResult::Error(msg) => {
                            eprintln!("{}", OutputHighlighter::error(&msg));
                        }
                        CommandResult::Exit => {
                            log::info!("User requested exit");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    log::debug!("Interrupted (Ctrl-C)");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("exit");
                    log::info!("EOF received (Ctrl-D)");
                    break;
                }
                Err(err) => {
                    log::error!("Readline error: {}", err);
                    return Err(anyhow!("Readline error: {}", err));
                }
            }
        }

        if let Err(e) = self.config.history.save_from(&mut editor) {
            log::warn!("Failed to save history: {}", e);
        }

        if let Some(notice) = exit_notice(&*session.clipboard) {
            println!("{}", OutputHighlighter::warning(notice));
        }

        log::info!("Shell exited");
        Ok(())
    }

    /// Lines whose command takes secret arguments stay out of history
    /// unless they carry no arguments.
    fn should_record(&self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        match parts.next().and_then(|name| self.registry.get(name)) {
            Some(cmd) if cmd.sensitive_args() => parts.next().is_none(),
            _ => true,
        }
    }

    /// Parses and executes one command line against `session`.
    ///
    /// Returns the command result and whether the credential file changed.
    pub fn execute_line(&self, line: &str, session: &mut Session) -> (CommandResult, bool) {
        let mut ctx = ShellContext::new(session).with_registry(&self.registry);
        let result = self.execute_with_context(line, &mut ctx);
        (result, ctx.modified)
    }

    fn execute_with_context(&self, line: &str, ctx: &mut ShellContext) -> CommandResult {
        let line = line.trim_start();
        let (cmd_name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if cmd_name.is_empty() {
            return CommandResult::Continue;
        }

        match self.registry.get(cmd_name) {
            Some(cmd) => {
                let args: Vec<&str> = if !cmd.raw_args() {
                    rest.split_whitespace().collect()
                } else if rest.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![rest]
                };
                // Arguments may be secrets, so only their count is logged
                log::debug!("Executing command: {} ({} args)", cmd_name, args.len());

                let start = std::time::Instant::now();
                let result = cmd.execute(&args, ctx);
                log::debug!("Command '{}' completed in {:?}", cmd_name, start.elapsed());
                result
            }
            None => CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            )),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
