//! Interactive selection between ambiguous lookup candidates.

use std::io::{self, BufRead, Write};

use crate::metadata::SearchResult;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("prompt failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before a choice was made")]
    Closed,

    #[error("prompt task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Asks the user to pick one of several search results.
pub trait Prompter: Send + Sync {
    /// Present `candidates` under `question` and return the typed choice.
    ///
    /// Choices are 1-based. Range checking is left to the caller, which
    /// re-prompts on an out-of-range answer.
    fn choose(&self, question: &str, candidates: &[SearchResult]) -> Result<usize, PromptError>;
}

/// Prompts on stdout and reads the answer from stdin.
///
/// `choose` blocks until a line is read. The searcher calls it through
/// `tokio::task::spawn_blocking`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdinPrompter {
    fn choose(&self, question: &str, candidates: &[SearchResult]) -> Result<usize, PromptError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        choose_from(&mut stdin.lock(), &mut stdout.lock(), question, candidates)
    }
}

/// Ask until a line parses as a number.
pub(crate) fn choose_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    candidates: &[SearchResult],
) -> Result<usize, PromptError> {
    writeln!(writer, "{question}")?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(writer, "  {}) {}", i + 1, candidate)?;
    }

    loop {
        write!(writer, "> ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        match line.trim().parse::<usize>() {
            Ok(n) => return Ok(n),
            Err(e) => writeln!(writer, "invalid number: {e}")?,
        }
    }
}

/// Always picks the first candidate. Used for non-interactive runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMatchPrompter;

impl Prompter for FirstMatchPrompter {
    fn choose(&self, _question: &str, _candidates: &[SearchResult]) -> Result<usize, PromptError> {
        Ok(1)
    }
}
