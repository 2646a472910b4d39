//! Error types for buildx-setup
//!
//! All modules use `SetupResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for buildx-setup operations
pub type SetupResult<T> = Result<T, SetupError>;

/// All errors that can occur while preparing builder arguments
#[derive(Error, Debug)]
pub enum SetupError {
    // Configuration errors
    #[error("Invalid buildkitd config in {origin}: {source}")]
    ConfigParse {
        origin: String,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("Invalid inputs file at {path}: {reason}")]
    InputsInvalid { path: PathBuf, reason: String },

    // Buildx errors
    #[error("Could not parse buildx version from: {0}")]
    VersionUnparsable(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    User(String),
}

impl SetupError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigParse { .. } => Some("Check the buildkitd config for TOML syntax errors"),
            Self::CommandFailed { .. } => Some("Is the docker CLI installed and on PATH?"),
            Self::VersionUnparsable(_) => Some("Pass --buildx-version to skip detection"),
            _ => None,
        }
    }
}
