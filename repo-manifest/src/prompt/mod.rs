//! Interactive collection of the repository owner, name and output directory.
//!
//! Input is gathered through the [`InputProvider`] trait so the generator can
//! be driven either by a terminal session ([`Prompter`]) or by fixed values
//! ([`FixedInput`]).

mod error;
mod input;

pub use error::PromptError;
pub use input::UserInput;

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::PathBuf;
use tracing::debug;

/// Output directory used when the prompt is left blank.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Source of the owner, repository and output directory for a run.
pub trait InputProvider {
    /// Supplies the input for a single run.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the input cannot be obtained.
    fn provide(&mut self) -> Result<UserInput, PromptError>;
}

/// Line-based prompter reading answers from `reader` and writing questions to `writer`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Creates a prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over arbitrary reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Asks until a non-empty answer is given.
    fn ask_required(&mut self, field: &'static str, question: &str) -> Result<String, PromptError> {
        loop {
            match self.ask(field, question)? {
                Some(answer) => return Ok(answer),
                None => {
                    debug!(field, "Empty answer for required prompt");
                    writeln!(self.writer, "  {question} is required.")?;
                }
            }
        }
    }

    /// Asks once and falls back to `default` on a blank answer.
    fn ask_with_default(
        &mut self,
        field: &'static str,
        question: &str,
        default: &str,
    ) -> Result<String, PromptError> {
        let prompt = format!("{question} ({default})");
        Ok(self
            .ask(field, &prompt)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Writes the question and reads one trimmed line; `None` when blank.
    fn ask(&mut self, field: &'static str, question: &str) -> Result<Option<String>, PromptError> {
        write!(self.writer, "? {question}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput { field });
        }

        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

impl<R: BufRead, W: Write> InputProvider for Prompter<R, W> {
    fn provide(&mut self) -> Result<UserInput, PromptError> {
        let owner = self.ask_required("owner", "GitHub repository owner")?;
        let repo = self.ask_required("repo", "GitHub repository name")?;
        let output_dir = self.ask_with_default("output_dir", "Output directory", DEFAULT_OUTPUT_DIR)?;

        Ok(UserInput {
            owner,
            repo,
            output_dir: PathBuf::from(output_dir),
        })
    }
}

/// Provider that hands out a preset [`UserInput`].
#[derive(Debug, Clone)]
pub struct FixedInput(pub UserInput);

impl InputProvider for FixedInput {
    fn provide(&mut self) -> Result<UserInput, PromptError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(answers: &str) -> (Result<UserInput, PromptError>, String) {
        let mut output = Vec::new();
        let result = Prompter::new(Cursor::new(answers.as_bytes()), &mut output).provide();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn can_collect_all_answers() {
        let (result, _) = prompt("octocat\nHello-World\ndist/pkg\n");
        let input = result.unwrap();

        assert_eq!(input.owner, "octocat");
        assert_eq!(input.repo, "Hello-World");
        assert_eq!(input.output_dir, PathBuf::from("dist/pkg"));
    }

    #[test]
    fn blank_output_dir_uses_default() {
        let (result, output) = prompt("octocat\nHello-World\n\n");

        assert_eq!(result.unwrap().output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(output.contains("Output directory (./output)"));
    }

    #[test]
    fn empty_owner_reprompts_until_given() {
        let (result, output) = prompt("\n   \noctocat\nHello-World\n\n");

        assert_eq!(result.unwrap().owner, "octocat");
        assert_eq!(output.matches("GitHub repository owner is required.").count(), 2);
    }

    #[test]
    fn empty_repo_reprompts_until_given() {
        let (result, output) = prompt("octocat\n\nHello-World\n\n");

        assert_eq!(result.unwrap().repo, "Hello-World");
        assert_eq!(output.matches("GitHub repository name is required.").count(), 1);
    }

    #[test]
    fn answers_are_trimmed() {
        let (result, _) = prompt("  octocat \n\tHello-World\n  out  \n");
        let input = result.unwrap();

        assert_eq!(input.owner, "octocat");
        assert_eq!(input.repo, "Hello-World");
        assert_eq!(input.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = prompt("octocat\n\n");

        assert!(matches!(
            result,
            Err(PromptError::EndOfInput { field: "repo" })
        ));
    }

    #[test]
    fn fixed_input_returns_preset_values() {
        let input = UserInput {
            owner: "octocat".to_string(),
            repo: "Hello-World".to_string(),
            output_dir: PathBuf::from("out"),
        };

        let provided = FixedInput(input.clone()).provide().unwrap();
        assert_eq!(provided, input);
    }
}
