//! Orchestrates a single prompt, fetch, build and write run.

mod config;
mod error;

pub use config::{GeneratorConfig, DEFAULT_API_BASE};
pub use error::GeneratorError;

use crate::fetch::fetch_metadata;
use crate::manifest::Manifest;
use crate::prompt::{InputProvider, UserInput};
use crate::writer::{ensure_dir, write_manifest};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Path of the written `package.json`.
    pub path: PathBuf,

    /// The manifest that was written.
    pub manifest: Manifest,
}

/// Generates `package.json` files from GitHub repository metadata.
pub struct Generator {
    octocrab: Octocrab,
}

impl Generator {
    /// Builds a generator from the provided configuration.
    ///
    /// The client is unauthenticated and never retries.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        // Both ring and aws-lc-rs may be compiled in; rustls needs one picked.
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

        let octocrab = Octocrab::builder()
            .base_uri(config.api_base())?
            .add_retry_config(RetryConfig::None)
            .build()?;
        debug!(api_base = %config.api_base(), "Built GitHub client");
        Ok(Self { octocrab })
    }

    /// Collects input from `provider`, then runs [`Generator::generate`].
    pub async fn run<P: InputProvider>(
        &self,
        provider: &mut P,
    ) -> Result<GenerationOutcome, GeneratorError> {
        let input = provider.provide()?;
        self.generate(&input).await
    }

    /// Fetches metadata for `input`, builds the manifest and writes it.
    ///
    /// The output directory is only touched after the fetch succeeds.
    pub async fn generate(&self, input: &UserInput) -> Result<GenerationOutcome, GeneratorError> {
        let metadata = fetch_metadata(&self.octocrab, &input.owner, &input.repo).await?;
        let manifest = Manifest::from_metadata(&metadata);

        ensure_dir(&input.output_dir)?;
        let path = write_manifest(&input.output_dir, &manifest)?;

        info!(
            repo = %format!("{}/{}", input.owner, input.repo),
            path = %path.display(),
            "Generated manifest"
        );
        Ok(GenerationOutcome { path, manifest })
    }
}
