//! Inputs file schema
//!
//! Keys mirror the CI action inputs (kebab-case):
//!
//! ```toml
//! [inputs]
//! driver = "kubernetes"
//! driver-opts = ["namespace=ci"]
//! platforms = ["linux/amd64"]
//!
//! [[nodes]]
//! name = "arm"
//! platforms = "linux/arm64"
//! ```

use crate::config::parse_input_list;
use crate::inputs::{BuildkitdConfig, Driver, Inputs, Node};
use serde::{Deserialize, Serialize};

/// Root of an inputs file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsFile {
    /// Builder inputs
    pub inputs: RawInputs,

    /// Nodes to append to the builder
    pub nodes: Vec<Node>,
}

/// Builder inputs as the CI layer provides them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawInputs {
    pub version: String,
    pub name: String,
    pub driver: String,
    pub driver_opts: Vec<String>,
    pub buildkitd_flags: String,
    pub buildkitd_config: String,
    pub buildkitd_config_inline: String,
    pub platforms: Vec<String>,
    pub install: bool,
    #[serde(rename = "use")]
    pub use_builder: bool,
    pub cleanup: bool,
    pub endpoint: String,
    pub append: String,
    pub cache_binary: bool,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            version: String::new(),
            name: String::new(),
            driver: Driver::DOCKER_CONTAINER.to_string(),
            driver_opts: vec![],
            buildkitd_flags: String::new(),
            buildkitd_config: String::new(),
            buildkitd_config_inline: String::new(),
            platforms: vec![],
            install: false,
            use_builder: true,
            cleanup: true,
            endpoint: String::new(),
            append: String::new(),
            cache_binary: true,
        }
    }
}

impl RawInputs {
    /// Convert into typed inputs.
    ///
    /// List entries may themselves hold newline-separated values (and, for
    /// platforms, comma-separated ones) the way CI inputs do.
    pub fn into_inputs(self) -> Inputs {
        let buildkitd_config = BuildkitdConfig::from_parts(
            Some(self.buildkitd_config.as_str()),
            Some(self.buildkitd_config_inline.as_str()),
        );

        Inputs {
            version: self.version,
            name: self.name,
            driver: Driver::from(self.driver),
            driver_opts: flatten_list(&self.driver_opts, true),
            buildkitd_flags: self.buildkitd_flags,
            buildkitd_config,
            platforms: flatten_list(&self.platforms, false),
            install: self.install,
            use_builder: self.use_builder,
            cleanup: self.cleanup,
            endpoint: self.endpoint,
            append: self.append,
            cache_binary: self.cache_binary,
        }
    }
}

fn flatten_list(entries: &[String], ignore_comma: bool) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| parse_input_list(entry, ignore_comma))
        .collect()
}
