//! Generator configuration.

/// GitHub REST API host used when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Configuration for generating a manifest.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of the GitHub REST API.
    api_base: String,
}

impl GeneratorConfig {
    /// Creates a configuration targeting the public GitHub API.
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Sets a custom API base URL (e.g. a local mock server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Returns the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
