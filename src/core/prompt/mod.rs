mod types;

pub use types::*;

use crate::utils::tty;
use std::io::{self, BufRead, Write};

/// Interactive prompt engine.
/// Handles TTY detection and provides consistent prompting behavior.
pub struct PromptEngine {
    interactive: bool,
}

impl PromptEngine {
    /// Create engine with automatic TTY detection.
    pub fn new() -> Self {
        Self {
            interactive: tty::require_tty_for_interactive(),
        }
    }

    /// Force non-interactive mode.
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Run a yes/no prompt. Returns default if non-interactive.
    pub fn yes_no(&self, prompt: &YesNoPrompt) -> bool {
        if !self.interactive {
            return prompt.default;
        }

        let suffix = if prompt.default { "[Y/n]" } else { "[y/N]" };
        let Some(input) = read_answer(&format!("{} {}: ", prompt.question, suffix)) else {
            return prompt.default;
        };

        let trimmed = input.to_lowercase();
        if trimmed.is_empty() {
            return prompt.default;
        }

        trimmed.starts_with('y')
    }

    /// Run a text prompt, asking again until the validator accepts the answer.
    ///
    /// Returns the default (if any) when non-interactive or when stdin closes.
    pub fn text(&self, prompt: &TextPrompt) -> Option<String> {
        if !self.interactive {
            return prompt.default.clone();
        }

        let question = match &prompt.default {
            Some(default) => format!("{} ({}): ", prompt.question, default),
            None => format!("{}: ", prompt.question),
        };

        loop {
            let input = read_answer(&question)?;
            let answer = if input.is_empty() {
                match &prompt.default {
                    Some(default) => default.clone(),
                    None => continue,
                }
            } else {
                input
            };

            match prompt.validate.and_then(|validate| validate(&answer)) {
                Some(problem) => eprintln!(">> {}", problem),
                None => return Some(answer),
            }
        }
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Print `question` to stderr and read one trimmed line; None on EOF or read error.
fn read_answer(question: &str) -> Option<String> {
    eprint!("{}", question);
    io::stderr().flush().ok();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}
