//! Prompt error types.

use thiserror::Error;

/// Errors that can occur while collecting user input.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input ended before a required answer was given.
    #[error("Input closed before '{field}' was provided")]
    EndOfInput { field: &'static str },
}
