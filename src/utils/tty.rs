//! Terminal detection.

use std::io::{self, IsTerminal};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stderr_tty() -> bool {
    io::stderr().is_terminal()
}

/// Prompts read stdin and write to stderr, so both must be terminals.
pub fn require_tty_for_interactive() -> bool {
    is_stdin_tty() && is_stderr_tty()
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if is_stderr_tty() {
        eprintln!("{}", message);
    }
}
