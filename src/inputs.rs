//! Typed builder inputs
//!
//! Contains the data structures the argument builders consume. They are
//! constructed once per invocation and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Buildx driver identifier
///
/// Wraps the raw driver string so it can be emitted verbatim after
/// `--driver`, including the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Driver(String);

impl Driver {
    pub const DOCKER: &'static str = "docker";
    pub const DOCKER_CONTAINER: &'static str = "docker-container";
    pub const KUBERNETES: &'static str = "kubernetes";
    pub const REMOTE: &'static str = "remote";
    pub const CLOUD: &'static str = "cloud";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reuses the Docker engine's own builder instead of creating one
    pub fn is_docker(&self) -> bool {
        self.0 == Self::DOCKER
    }

    pub fn is_kubernetes(&self) -> bool {
        self.0 == Self::KUBERNETES
    }

    pub fn is_cloud(&self) -> bool {
        self.0 == Self::CLOUD
    }

    /// Drivers that receive the default insecure-entitlement buildkitd flags
    /// when no explicit flags are given
    pub fn supports_default_buildkitd_flags(&self) -> bool {
        matches!(
            self.0.as_str(),
            "" | Self::DOCKER_CONTAINER | Self::DOCKER | Self::KUBERNETES
        )
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Driver {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Driver {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Where the buildkitd configuration comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BuildkitdConfig {
    /// Operator-provided TOML file
    File(PathBuf),
    /// TOML text passed directly
    Inline(String),
    /// Nothing configured; an empty document is still merged and resolved
    #[default]
    None,
}

impl BuildkitdConfig {
    /// Build from the two raw CI inputs. A non-empty file path wins over
    /// inline text; empty strings count as absent.
    pub fn from_parts(file: Option<&str>, inline: Option<&str>) -> Self {
        match (file, inline) {
            (Some(path), _) if !path.is_empty() => Self::File(PathBuf::from(path)),
            (_, Some(text)) if !text.is_empty() => Self::Inline(text.to_string()),
            _ => Self::None,
        }
    }
}

/// Declarative inputs for one invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    /// Requested buildx version (selects the binary to install)
    pub version: String,
    /// Builder name
    pub name: String,
    pub driver: Driver,
    /// Repeated as `--driver-opt`, in order
    pub driver_opts: Vec<String>,
    /// Raw `--buildkitd-flags` value
    pub buildkitd_flags: String,
    pub buildkitd_config: BuildkitdConfig,
    /// Target platforms, joined with commas for `--platform`
    pub platforms: Vec<String>,
    pub install: bool,
    /// Switch the current builder instance to the new one
    pub use_builder: bool,
    pub cleanup: bool,
    /// Positional endpoint (Docker context or remote address)
    pub endpoint: String,
    pub append: String,
    pub cache_binary: bool,
}

/// A node appended to an existing multi-node builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Node {
    pub name: Option<String>,
    pub driver_opts: Option<Vec<String>>,
    pub buildkitd_flags: Option<String>,
    /// Already comma-joined
    pub platforms: Option<String>,
    pub endpoint: Option<String>,
}
