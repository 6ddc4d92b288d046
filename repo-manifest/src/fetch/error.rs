//! Metadata fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching repository metadata.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or unreadable response.
    #[error("Failed to fetch metadata for {owner}/{repo}: {source}")]
    GitHubError {
        owner: String,
        repo: String,
        #[source]
        source: octocrab::Error,
    },

    /// The API answered with a non-success status.
    #[error("Failed to fetch metadata for {owner}/{repo}: HTTP {status}: {message}")]
    Status {
        owner: String,
        repo: String,
        status: u16,
        /// GitHub's `message`, or the status reason when the body has none.
        message: String,
    },

    /// The response body doesn't match the repository payload.
    #[error("Failed to decode metadata for {owner}/{repo}: {source}")]
    DecodeError {
        owner: String,
        repo: String,
        #[source]
        source: serde_json::Error,
    },
}
