//! CLI for the repository manifest generator.
//!
//! Prompts for a GitHub repository, fetches its public metadata and writes a
//! derived `package.json` to the chosen directory.

use clap::Parser;
use repo_manifest::{
    GenerationOutcome, Generator, GeneratorConfig, GeneratorError, Prompter, DEFAULT_API_BASE,
};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Generate a package.json from a GitHub repository's public metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the GitHub REST API.
    #[arg(long, default_value = DEFAULT_API_BASE, hide = true)]
    api_base: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => {
            println!("package.json written to {}", outcome.path.display());
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Failed to generate package.json");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, away from the prompts
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<GenerationOutcome, GeneratorError> {
    let config = GeneratorConfig::new().with_api_base(args.api_base);
    let generator = Generator::new(config)?;
    generator.run(&mut Prompter::stdio()).await
}
