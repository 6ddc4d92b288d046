//! Collected user input.

use std::path::PathBuf;

/// Answers gathered from the prompts, consumed once by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Directory that receives `package.json`.
    pub output_dir: PathBuf,
}
