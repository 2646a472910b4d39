//! Docker CLI backed toolkit
//!
//! Implements the Toolkit trait by running the docker CLI directly.
//! Resolved buildkitd configs are written into a private temp directory.

use crate::error::{SetupError, SetupResult};
use crate::toolkit::Toolkit;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;
use tracing::debug;

/// Toolkit using the docker CLI found on PATH (or a custom binary)
pub struct DockerToolkit {
    docker: String,
    tmp_dir: PathBuf,
}

impl DockerToolkit {
    /// Create a toolkit running `docker`, writing configs under `tmp_root`
    pub fn new(docker: impl Into<String>, tmp_root: &Path) -> Self {
        Self {
            docker: docker.into(),
            tmp_dir: tmp_root.join("buildx-setup"),
        }
    }

    /// Directory receiving resolved config files
    pub fn tmp_dir(&self) -> &Path {
        &self.tmp_dir
    }

    /// Execute a docker command and return trimmed stdout
    async fn exec(&self, args: &[&str]) -> SetupResult<String> {
        let command = format!("{} {}", self.docker, args.join(" "));
        debug!("Executing: {}", command);

        let output = Command::new(&self.docker)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| SetupError::command_failed(command.clone(), e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(SetupError::command_exec(command, stderr.trim()))
        }
    }

    /// Write a config into the temp directory under a fresh name
    async fn write_temp_config(&self, content: &str) -> SetupResult<String> {
        fs::create_dir_all(&self.tmp_dir).await.map_err(|e| {
            SetupError::io(format!("creating directory {}", self.tmp_dir.display()), e)
        })?;

        let path = self
            .tmp_dir
            .join(format!("buildkitd-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, content)
            .await
            .map_err(|e| SetupError::io(format!("writing config to {}", path.display()), e))?;

        debug!("Resolved buildkitd config to {}", path.display());
        Ok(path.display().to_string())
    }
}

#[async_trait]
impl Toolkit for DockerToolkit {
    async fn buildx_version(&self) -> SetupResult<String> {
        let stdout = self.exec(&["buildx", "version"]).await?;
        parse_buildx_version(&stdout).ok_or(SetupError::VersionUnparsable(stdout))
    }

    async fn docker_context(&self) -> SetupResult<String> {
        self.exec(&["context", "inspect", "--format", "{{.Name}}"]).await
    }

    async fn config_from_file(&self, path: &Path) -> SetupResult<String> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SetupError::io(format!("reading config from {}", path.display()), e))?;
        self.write_temp_config(&content).await
    }

    async fn config_from_string(&self, text: &str) -> SetupResult<String> {
        self.write_temp_config(text).await
    }
}

/// Extract the version from `docker buildx version` output.
///
/// Expected shape: `github.com/docker/buildx v0.12.0 542e5d8`. The leading
/// `v` is removed. Returns `None` when no version-looking token follows the
/// repository path.
pub fn parse_buildx_version(output: &str) -> Option<String> {
    let token = output.split_whitespace().nth(1)?;
    let version = token.strip_prefix('v').unwrap_or(token);
    if version.starts_with(|c: char| c.is_ascii_digit()) {
        Some(version.to_string())
    } else {
        None
    }
}
