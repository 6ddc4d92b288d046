//! Generator error types.

/// Errors that can occur while generating a manifest.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Collecting user input failed.
    #[error(transparent)]
    Prompt(#[from] crate::prompt::PromptError),

    /// Fetching repository metadata failed.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// Writing the manifest failed.
    #[error(transparent)]
    Write(#[from] crate::writer::WriteError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
