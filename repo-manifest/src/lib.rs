#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod fetch;
pub mod generator;
pub mod manifest;
pub mod prompt;
pub mod writer;

pub use fetch::{fetch_metadata, FetchError, RepositoryLicense, RepositoryMetadata, RepositoryOwner};
pub use generator::{
    GenerationOutcome, Generator, GeneratorConfig, GeneratorError, DEFAULT_API_BASE,
};
pub use manifest::{Bugs, Manifest, Repository, Scripts};
pub use prompt::{FixedInput, InputProvider, PromptError, Prompter, UserInput, DEFAULT_OUTPUT_DIR};
pub use writer::{ensure_dir, write_manifest, WriteError, MANIFEST_FILE_NAME};
