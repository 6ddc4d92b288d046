//! Repository metadata retrieval from the GitHub REST API.
//!
//! A single unauthenticated `GET /repos/{owner}/{repo}` is issued against the
//! client's base URI. Failures are returned to the caller, never retried.

mod error;
mod metadata;

pub use error::FetchError;
pub use metadata::{RepositoryLicense, RepositoryMetadata, RepositoryOwner};

use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, info, info_span, warn, Instrument};

/// Fetches the public metadata of `owner/repo`.
///
/// # Arguments
///
/// * `octocrab` - GitHub client pointed at the API host
/// * `owner` - Repository owner
/// * `repo` - Repository name
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, a non-2xx response, or a body
/// that doesn't match [`RepositoryMetadata`].
pub async fn fetch_metadata(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<RepositoryMetadata, FetchError> {
    let span = info_span!("fetch", owner = %owner, repo = %repo);

    async {
        let route = repository_route(owner, repo);
        info!(route = %route, "Fetching repository metadata");

        let transport_error = |source: octocrab::Error| FetchError::GitHubError {
            owner: owner.to_string(),
            repo: repo.to_string(),
            source,
        };

        let response = octocrab
            ._get(route.as_str())
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = octocrab
            .body_to_string(response)
            .await
            .map_err(transport_error)?;

        if !status.is_success() {
            let message = error_message(&body, status.canonical_reason());
            warn!(status = status.as_u16(), message = %message, "Repository request failed");
            return Err(FetchError::Status {
                owner: owner.to_string(),
                repo: repo.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let metadata: RepositoryMetadata =
            serde_json::from_str(&body).map_err(|source| FetchError::DecodeError {
                owner: owner.to_string(),
                repo: repo.to_string(),
                source,
            })?;

        debug!(name = %metadata.name, html_url = %metadata.html_url, "Fetched repository metadata");
        Ok(metadata)
    }
    .instrument(span)
    .await
}

/// Builds the REST route for a repository.
fn repository_route(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}")
}

/// Error payload GitHub attaches to failed requests.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Picks a readable message for a failed response.
///
/// Prefers GitHub's `message`, then the status reason phrase.
fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| "empty response".to_string())
}
