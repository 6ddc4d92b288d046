//! `package.json` manifest derived from repository metadata.
//!
//! The mapping is total: every field is either copied from the metadata or
//! filled with a fixed default. Keys serialize in declaration order.

use crate::fetch::RepositoryMetadata;
use serde::Serialize;

/// Version written to every generated manifest.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Entry point written to every generated manifest.
pub const DEFAULT_MAIN: &str = "index.js";

/// Placeholder test command; always fails.
pub const DEFAULT_TEST_SCRIPT: &str = "echo \"Error: no test specified\" && exit 1";

/// License used when the repository reports none.
pub const DEFAULT_LICENSE: &str = "MIT";

/// A generated `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Package name, taken from the repository name.
    pub name: String,

    /// Package version.
    pub version: String,

    /// Repository description.
    pub description: String,

    /// Entry point module.
    pub main: String,

    /// npm scripts.
    pub scripts: Scripts,

    /// Where the source lives.
    pub repository: Repository,

    /// Repository topics.
    pub keywords: Vec<String>,

    /// Owner login.
    pub author: String,

    /// SPDX license identifier.
    pub license: String,

    /// Issue tracker.
    pub bugs: Bugs,

    /// Project website.
    pub homepage: String,
}

/// The `scripts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    /// Command run by `npm test`.
    pub test: String,
}

/// The `repository` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Version control system; always "git".
    #[serde(rename = "type")]
    pub kind: String,

    /// Browser URL of the repository.
    pub url: String,
}

/// The `bugs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bugs {
    /// Issues page URL.
    pub url: String,
}

impl Manifest {
    /// Builds a manifest from fetched repository metadata.
    ///
    /// Empty strings count as missing for `description`, `license` and
    /// `homepage`.
    #[must_use]
    pub fn from_metadata(metadata: &RepositoryMetadata) -> Self {
        let html_url = metadata.html_url.clone();
        let license = metadata
            .license
            .as_ref()
            .and_then(|license| non_empty(license.spdx_id.as_deref()))
            .unwrap_or(DEFAULT_LICENSE);

        Self {
            name: metadata.name.clone(),
            version: DEFAULT_VERSION.to_string(),
            description: non_empty(metadata.description.as_deref())
                .unwrap_or_default()
                .to_string(),
            main: DEFAULT_MAIN.to_string(),
            scripts: Scripts {
                test: DEFAULT_TEST_SCRIPT.to_string(),
            },
            repository: Repository {
                kind: "git".to_string(),
                url: html_url.clone(),
            },
            keywords: metadata.topics.clone().unwrap_or_default(),
            author: metadata.owner.login.clone(),
            license: license.to_string(),
            bugs: Bugs {
                url: format!("{html_url}/issues"),
            },
            homepage: non_empty(metadata.homepage.as_deref())
                .map_or(html_url, str::to_string),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
