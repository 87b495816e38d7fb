//! Confirmation and masked-input prompts used by shell commands.

use anyhow::{Result, anyhow};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Asks a yes/no question. Anything other than yes is a no.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Reads a line without echoing it.
    fn secret(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{} [y/N] ", message)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }

    fn secret(&mut self, prompt: &str) -> Result<String> {
        rpassword::prompt_password(prompt).map_err(|e| anyhow!("Could not read input: {}", e))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Replays canned answers, for scripted sessions.
///
/// Runs out as "no" for confirmations and as an error for secrets.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirms: VecDeque<bool>,
    secrets: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secrets.push_back(secret.into());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn secret(&mut self, prompt: &str) -> Result<String> {
        self.secrets
            .pop_front()
            .ok_or_else(|| anyhow!("No input left for '{}'", prompt.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn test_scripted_prompter_replays_in_order() {
        let mut prompter = ScriptedPrompter::new()
            .with_confirm(true)
            .with_secret("one")
            .with_secret("two");

        assert!(prompter.confirm("ok?").unwrap());
        assert!(!prompter.confirm("ok?").unwrap());
        assert_eq!(prompter.secret("a").unwrap(), "one");
        assert_eq!(prompter.secret("b").unwrap(), "two");
        assert!(prompter.secret("c").is_err());
    }
}
