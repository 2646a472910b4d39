//! CLI argument definitions using clap derive

use crate::buildkitd::REGISTRY_HOST_ENV;
use crate::config::RawInputs;
use crate::inputs::Node;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// buildx-setup - argument generation for multi-node buildx builders
///
/// Prints the exact `docker buildx` arguments for creating, extending and
/// bootstrapping a builder, with version-gated flags and a buildkitd config
/// that trusts the local registry.
#[derive(Parser, Debug)]
#[command(name = "buildx-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Inputs file (TOML)
    #[arg(short, long, global = true, env = "BUILDX_SETUP_INPUTS")]
    pub inputs: Option<PathBuf>,

    /// Registry host to reach over plain HTTP from buildkitd
    #[arg(long, global = true, env = REGISTRY_HOST_ENV)]
    pub registry_host: Option<String>,

    /// Installed buildx version (skips `docker buildx version`)
    #[arg(long, global = true)]
    pub buildx_version: Option<String>,

    /// Docker CLI binary
    #[arg(long, global = true, default_value = "docker")]
    pub docker: String,

    /// Directory receiving resolved buildkitd configs
    #[arg(long, global = true, env = "RUNNER_TEMP")]
    pub tmp_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print arguments for `buildx create`
    Create,

    /// Print arguments for appending nodes to the builder
    Append(AppendArgs),

    /// Print arguments for `buildx inspect --bootstrap`
    Inspect,

    /// Print the resolved builder name
    Name,

    /// Print the buildx version tag to install
    Version,

    /// Print the merged buildkitd config
    Config,
}

/// Output format for argument lists
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON array per argument list
    #[default]
    Json,
    /// One token per line
    Lines,
}

/// Builder inputs, each also readable from its CI environment variable.
///
/// Values given here override the inputs file. Empty values are ignored.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Buildx release to install (e.g. v0.12.0, latest, cloud:v0.12.0)
    #[arg(long, global = true, env = "INPUT_VERSION")]
    pub release: Option<String>,

    /// Builder name
    #[arg(long, global = true, env = "INPUT_NAME")]
    pub name: Option<String>,

    /// Builder driver (docker-container, docker, kubernetes, remote, cloud)
    #[arg(long, global = true, env = "INPUT_DRIVER")]
    pub driver: Option<String>,

    /// Driver option (repeatable, newline-separated in the environment)
    #[arg(long = "driver-opt", global = true, env = "INPUT_DRIVER-OPTS")]
    pub driver_opts: Vec<String>,

    /// Flags for the buildkitd daemon
    #[arg(long, global = true, env = "INPUT_BUILDKITD-FLAGS", allow_hyphen_values = true)]
    pub buildkitd_flags: Option<String>,

    /// Buildkitd config file
    #[arg(long, global = true, env = "INPUT_BUILDKITD-CONFIG")]
    pub buildkitd_config: Option<String>,

    /// Inline buildkitd config (ignored when a config file is given)
    #[arg(long, global = true, env = "INPUT_BUILDKITD-CONFIG-INLINE")]
    pub buildkitd_config_inline: Option<String>,

    /// Target platforms (comma or newline separated)
    #[arg(long, global = true, env = "INPUT_PLATFORMS")]
    pub platforms: Vec<String>,

    /// Set buildx as the default docker builder
    #[arg(long, global = true, env = "INPUT_INSTALL", num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    pub install: Option<bool>,

    /// Switch to the builder after creating it
    #[arg(long = "use", global = true, env = "INPUT_USE", num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    pub use_builder: Option<bool>,

    /// Remove the builder when the job ends
    #[arg(long, global = true, env = "INPUT_CLEANUP", num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    pub cleanup: Option<bool>,

    /// Docker context or remote address for the builder
    #[arg(long, global = true, env = "INPUT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Nodes to append (consumed by the calling workflow)
    #[arg(long, global = true, env = "INPUT_APPEND")]
    pub append: Option<String>,

    /// Cache the buildx binary between runs
    #[arg(long, global = true, env = "INPUT_CACHE-BINARY", num_args = 0..=1,
          require_equals = true, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    pub cache_binary: Option<bool>,
}

impl InputArgs {
    /// Override `raw` with every value given on the command line or in the
    /// environment
    pub fn apply_to(&self, raw: &mut RawInputs) {
        override_str(&mut raw.version, &self.release);
        override_str(&mut raw.name, &self.name);
        override_str(&mut raw.driver, &self.driver);
        override_list(&mut raw.driver_opts, &self.driver_opts);
        override_str(&mut raw.buildkitd_flags, &self.buildkitd_flags);
        override_str(&mut raw.buildkitd_config, &self.buildkitd_config);
        override_str(&mut raw.buildkitd_config_inline, &self.buildkitd_config_inline);
        override_list(&mut raw.platforms, &self.platforms);
        override_str(&mut raw.endpoint, &self.endpoint);
        override_str(&mut raw.append, &self.append);

        if let Some(install) = self.install {
            raw.install = install;
        }
        if let Some(use_builder) = self.use_builder {
            raw.use_builder = use_builder;
        }
        if let Some(cleanup) = self.cleanup {
            raw.cleanup = cleanup;
        }
        if let Some(cache_binary) = self.cache_binary {
            raw.cache_binary = cache_binary;
        }
    }
}

fn override_str(target: &mut String, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        *target = value.to_string();
    }
}

fn override_list(target: &mut Vec<String>, values: &[String]) {
    if values.iter().any(|v| !v.trim().is_empty()) {
        *target = values.to_vec();
    }
}

/// Arguments for the append command
#[derive(Parser, Debug, Default)]
pub struct AppendArgs {
    /// Node name (without node flags, nodes come from the inputs file)
    #[arg(long)]
    pub node_name: Option<String>,

    /// Driver option for the node (repeatable)
    #[arg(long = "node-driver-opt")]
    pub node_driver_opts: Vec<String>,

    /// Buildkitd flags for the node
    #[arg(long, allow_hyphen_values = true)]
    pub node_buildkitd_flags: Option<String>,

    /// Platforms for the node (comma separated)
    #[arg(long)]
    pub node_platforms: Option<String>,

    /// Endpoint for the node
    #[arg(long)]
    pub node_endpoint: Option<String>,
}

impl AppendArgs {
    /// Node described by the `--node-*` flags, if any was given
    pub fn node(&self) -> Option<Node> {
        let node = Node {
            name: self.node_name.clone(),
            driver_opts: if self.node_driver_opts.is_empty() {
                None
            } else {
                Some(self.node_driver_opts.clone())
            },
            buildkitd_flags: self.node_buildkitd_flags.clone(),
            platforms: self.node_platforms.clone(),
            endpoint: self.node_endpoint.clone(),
        };

        if node == Node::default() {
            None
        } else {
            Some(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn inputs_override_file_values() {
        let cli = Cli::parse_from([
            "buildx-setup",
            "create",
            "--driver",
            "kubernetes",
            "--driver-opt",
            "namespace=ci",
            "--use=false",
            "--platforms",
            "linux/amd64,linux/arm64",
        ]);

        let mut raw = RawInputs {
            name: "from-file".to_string(),
            ..RawInputs::default()
        };
        cli.input.apply_to(&mut raw);

        assert_eq!(raw.name, "from-file");
        assert_eq!(raw.driver, "kubernetes");
        assert_eq!(raw.driver_opts, vec!["namespace=ci"]);
        assert!(!raw.use_builder);
        assert_eq!(raw.platforms, vec!["linux/amd64,linux/arm64"]);
    }

    #[test]
    fn bare_bool_flag_means_true() {
        let cli = Cli::parse_from(["buildx-setup", "--install", "create"]);
        assert_eq!(cli.input.install, Some(true));
    }

    #[test]
    fn empty_values_do_not_override() {
        let args = InputArgs {
            name: Some(String::new()),
            platforms: vec![" ".to_string()],
            ..InputArgs::default()
        };
        let mut raw = RawInputs {
            name: "keep".to_string(),
            platforms: vec!["linux/amd64".to_string()],
            ..RawInputs::default()
        };
        args.apply_to(&mut raw);

        assert_eq!(raw.name, "keep");
        assert_eq!(raw.platforms, vec!["linux/amd64"]);
    }

    #[test]
    fn append_node_from_flags() {
        let cli = Cli::parse_from([
            "buildx-setup",
            "append",
            "--node-name",
            "arm",
            "--node-driver-opt",
            "image=moby/buildkit:master",
            "--node-platforms",
            "linux/arm64",
        ]);

        let Commands::Append(args) = cli.command else {
            panic!("expected append");
        };
        let node = args.node().unwrap();
        assert_eq!(node.name.as_deref(), Some("arm"));
        assert_eq!(
            node.driver_opts,
            Some(vec!["image=moby/buildkit:master".to_string()])
        );
        assert!(node.endpoint.is_none());
    }

    #[test]
    fn append_without_node_flags() {
        assert!(AppendArgs::default().node().is_none());
    }
}
