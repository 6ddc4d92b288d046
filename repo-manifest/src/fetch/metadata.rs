//! Repository metadata as returned by `GET /repos/{owner}/{repo}`.

use serde::Deserialize;

/// The subset of the GitHub repository payload used to build a manifest.
///
/// Only `name`, `html_url` and `owner` are required; everything else may be
/// missing or `null` in the response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryMetadata {
    /// Repository name.
    pub name: String,

    /// Short description.
    pub description: Option<String>,

    /// Browser URL of the repository.
    pub html_url: String,

    /// Repository topics.
    pub topics: Option<Vec<String>>,

    /// Owning account.
    pub owner: RepositoryOwner,

    /// Detected license.
    pub license: Option<RepositoryLicense>,

    /// Project website.
    pub homepage: Option<String>,
}

/// Owner account of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryOwner {
    /// Account login name.
    pub login: String,
}

/// License detected on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryLicense {
    /// SPDX identifier (e.g. "MIT").
    pub spdx_id: Option<String>,
}
