//! Capabilities consumed from the outside world
//!
//! The argument builders never shell out themselves. Everything that needs
//! the buildx binary, the Docker CLI or randomness goes through these traits:
//! - `Toolkit`: version query, Docker context lookup, config references
//! - `IdGenerator`: unique identifiers for builder and node names

mod docker;

pub use docker::{parse_buildx_version, DockerToolkit};

use crate::error::SetupResult;
use async_trait::async_trait;
use std::path::Path;

/// Abstract buildx toolkit interface
#[async_trait]
pub trait Toolkit: Send + Sync {
    /// Version reported by the installed buildx binary
    async fn buildx_version(&self) -> SetupResult<String>;

    /// Name of the active Docker context
    async fn docker_context(&self) -> SetupResult<String>;

    /// Resolve a buildkitd config file to the reference passed to `--config`
    async fn config_from_file(&self, path: &Path) -> SetupResult<String>;

    /// Resolve buildkitd config text to the reference passed to `--config`
    async fn config_from_string(&self, text: &str) -> SetupResult<String>;
}

/// Source of unique identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
