//! Buildkitd configuration handling
//!
//! - `merge`: inject insecure registry settings into a TOML document
//! - `resolve`: produce the `--config` reference for `buildx create`

pub mod merge;
pub mod resolve;

pub use merge::{merge_registry_config, parse_config, render_config};
pub use resolve::{
    merged_config, merged_config_path, resolve_config, MERGED_CONFIG_FALLBACK,
    MERGED_CONFIG_FILENAME,
};

/// Environment variable naming the cluster-local registry to trust
pub const REGISTRY_HOST_ENV: &str = "LOCAL_REGISTRY_HOST";
