//! Buildkitd config resolution
//!
//! Turns the configured source (file, inline text or nothing) into the
//! reference passed to `buildx create --config`.

use crate::buildkitd::merge::{merge_registry_config, parse_config, render_config};
use crate::error::{SetupError, SetupResult};
use crate::inputs::BuildkitdConfig;
use crate::toolkit::Toolkit;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File written next to an operator-provided config.
///
/// Fixed name: concurrent runs sharing a config directory overwrite each
/// other's merged file.
pub const MERGED_CONFIG_FILENAME: &str = "buildkitd.merged.toml";

/// Used instead of [`MERGED_CONFIG_FILENAME`] when the source already has
/// that name
pub const MERGED_CONFIG_FALLBACK: &str = "buildkitd.merged.1.toml";

/// Merge registry trust into the configured source and resolve it through
/// the toolkit.
///
/// A file config is rewritten to its [`merged_config_path`] and resolved as
/// a file; anything else is resolved as text.
pub async fn resolve_config(
    config: &BuildkitdConfig,
    registry_host: Option<&str>,
    toolkit: &dyn Toolkit,
) -> SetupResult<String> {
    let merged = merged_config(config, registry_host).await?;

    match config {
        BuildkitdConfig::File(path) => {
            let target = merged_config_path(path);
            fs::write(&target, merged).await.map_err(|e| {
                SetupError::io(format!("writing merged config to {}", target.display()), e)
            })?;
            debug!("Wrote merged buildkitd config to {}", target.display());
            toolkit.config_from_file(&target).await
        }
        BuildkitdConfig::Inline(_) | BuildkitdConfig::None => {
            toolkit.config_from_string(&merged).await
        }
    }
}

/// Merged config text for the configured source, without writing anything
pub async fn merged_config(
    config: &BuildkitdConfig,
    registry_host: Option<&str>,
) -> SetupResult<String> {
    let (text, origin) = match config {
        BuildkitdConfig::File(path) => {
            let text = fs::read_to_string(path).await.map_err(|e| {
                SetupError::io(format!("reading buildkitd config from {}", path.display()), e)
            })?;
            (text, path.display().to_string())
        }
        BuildkitdConfig::Inline(text) => (text.clone(), "inline config".to_string()),
        BuildkitdConfig::None => (String::new(), "inline config".to_string()),
    };

    let mut doc = parse_config(&text, &origin)?;
    merge_registry_config(&mut doc, registry_host);
    Ok(render_config(&doc))
}

/// Sibling path receiving the merged copy of `source`. Never `source`
/// itself.
pub fn merged_config_path(source: &Path) -> PathBuf {
    let name = if source.file_name() == Some(OsStr::new(MERGED_CONFIG_FILENAME)) {
        MERGED_CONFIG_FALLBACK
    } else {
        MERGED_CONFIG_FILENAME
    };
    source.parent().unwrap_or_else(|| Path::new("")).join(name)
}
