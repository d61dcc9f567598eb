//! How pages reach the user: blocking notices and yes/no confirmations.

use std::io::{BufRead, Write};

pub trait Prompter: Send + Sync {
    /// Show a notice the user must acknowledge.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `false` unless the user explicitly agrees.
    fn confirm(&self, message: &str) -> bool;
}

/// Terminal prompter: notices go to stderr, answers come from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompter {
    /// Answer every confirmation with yes without reading stdin.
    pub assume_yes: bool,
}

impl ConsolePrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for ConsolePrompter {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        ask(std::io::stderr(), std::io::stdin().lock(), message)
    }
}

/// Write the question, then read one answer line. Output errors are only
/// traced; the answer is still read.
fn ask(mut out: impl Write, mut input: impl BufRead, message: &str) -> bool {
    if let Err(e) = write!(out, "{message} [y/N] ").and_then(|()| out.flush()) {
        tracing::trace!(error = %e, "Failed to write confirmation prompt");
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read confirmation");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
