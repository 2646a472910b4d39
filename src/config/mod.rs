//! Inputs loading for buildx-setup

pub mod schema;

pub use schema::{InputsFile, RawInputs};

use crate::error::{SetupError, SetupResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Loads the optional TOML inputs file
pub struct InputsLoader {
    path: Option<PathBuf>,
}

impl InputsLoader {
    /// Loader without a file: every input takes its default
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Loader reading `path`
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Load the inputs file, or defaults when no path was given
    pub async fn load(&self) -> SetupResult<InputsFile> {
        match &self.path {
            Some(path) => self.load_from_file(path).await,
            None => {
                debug!("No inputs file, using defaults");
                Ok(InputsFile::default())
            }
        }
    }

    /// Load inputs from a specific file
    pub async fn load_from_file(&self, path: &Path) -> SetupResult<InputsFile> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SetupError::io(format!("reading inputs from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| SetupError::InputsInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the inputs file path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for InputsLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a CI list input into entries.
///
/// Entries are separated by newlines and, unless `ignore_comma` is set, by
/// commas. Driver options keep their commas (`image=x,network=host` is one
/// option). Entries are trimmed and empty ones dropped.
pub fn parse_input_list(raw: &str, ignore_comma: bool) -> Vec<String> {
    raw.lines()
        .flat_map(|line| {
            if ignore_comma {
                vec![line]
            } else {
                line.split(',').collect()
            }
        })
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
