//! Input and output coloring for the shell.

use rustyline::highlight::{CmdKind, Highlighter};
use std::borrow::Cow;
use std::sync::Arc;

use crate::shell::command::{ArgKind, CommandRegistry};

/// ANSI escape codes.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// Highlighter for shell input with syntax coloring.
pub struct PasskeepHighlighter {
    registry: Arc<CommandRegistry>,
}

impl PasskeepHighlighter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    fn highlight_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let Some(command) = trimmed.split_whitespace().next() else {
            return line.to_string();
        };

        let leading_ws = &line[..line.len() - trimmed.len()];
        let rest = &trimmed[command.len()..];
        let cmd = self.registry.get(command);

        let mut result = String::from(leading_ws);
        match &cmd {
            Some(_) => {
                result.push_str(colors::BOLD);
                result.push_str(colors::CYAN);
            }
            None => result.push_str(colors::RED),
        }
        result.push_str(command);
        result.push_str(colors::RESET);

        if rest.is_empty() {
            return result;
        }

        let arg_color = match &cmd {
            Some(cmd) if cmd.sensitive_args() => colors::DIM,
            Some(cmd) if cmd.arg_kind() == ArgKind::Website => colors::MAGENTA,
            Some(cmd) if cmd.arg_kind() == ArgKind::Command => colors::YELLOW,
            _ => colors::WHITE,
        };

        // Color each argument, keeping the original spacing
        let mut chunk_start = None;
        for (i, ch) in rest.char_indices() {
            match (ch.is_whitespace(), chunk_start) {
                (true, Some(start)) => {
                    push_colored(&mut result, arg_color, &rest[start..i]);
                    chunk_start = None;
                    result.push(ch);
                }
                (true, None) => result.push(ch),
                (false, None) => chunk_start = Some(i),
                (false, Some(_)) => {}
            }
        }
        if let Some(start) = chunk_start {
            push_colored(&mut result, arg_color, &rest[start..]);
        }

        result
    }
}

fn push_colored(out: &mut String, color: &str, text: &str) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(colors::RESET);
}

impl Highlighter for PasskeepHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(format!(
            "{}{}{}{}",
            colors::BOLD,
            colors::BRIGHT_GREEN,
            prompt,
            colors::RESET
        ))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("{}{}{}", colors::DIM, hint, colors::RESET))
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        _completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        Cow::Owned(format!(
            "{}{}{}",
            colors::BRIGHT_CYAN,
            candidate,
            colors::RESET
        ))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Formatting for command output.
pub struct OutputHighlighter;

impl OutputHighlighter {
    pub fn error(msg: &str) -> String {
        format!("{}{}{}", colors::BRIGHT_RED, msg, colors::RESET)
    }

    pub fn warning(msg: &str) -> String {
        format!("{}{}{}", colors::YELLOW, msg, colors::RESET)
    }
}
