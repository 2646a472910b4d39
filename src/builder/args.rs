//! Buildx argument construction
//!
//! Produces argv tokens for `buildx create`, `buildx create --append` and
//! `buildx inspect`. Tokens are neither quoted nor escaped; the executor
//! passes them to the process as-is.

use crate::buildkitd::resolve_config;
use crate::error::SetupResult;
use crate::inputs::{Driver, Inputs, Node};
use crate::toolkit::{IdGenerator, Toolkit, UuidGenerator};
use crate::version::{Feature, VersionGate};

/// Buildkitd flags granting the insecure entitlements BuildKit withholds by
/// default
pub const DEFAULT_BUILDKITD_FLAGS: &str =
    "--allow-insecure-entitlement security.insecure --allow-insecure-entitlement network.host";

/// Builds argument lists for one set of inputs
pub struct ArgsBuilder<'a> {
    inputs: &'a Inputs,
    gate: &'a VersionGate,
    toolkit: &'a dyn Toolkit,
    ids: &'a dyn IdGenerator,
    registry_host: Option<&'a str>,
}

impl<'a> ArgsBuilder<'a> {
    pub fn new(inputs: &'a Inputs, gate: &'a VersionGate, toolkit: &'a dyn Toolkit) -> Self {
        Self {
            inputs,
            gate,
            toolkit,
            ids: &UuidGenerator,
            registry_host: None,
        }
    }

    /// Use a custom id source for generated node names
    pub fn with_ids(mut self, ids: &'a dyn IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Registry host to mark insecure in the buildkitd config
    pub fn with_registry_host(mut self, host: Option<&'a str>) -> Self {
        self.registry_host = host;
        self
    }

    /// Arguments for `buildx create`
    pub async fn create_args(&self) -> SetupResult<Vec<String>> {
        let inputs = self.inputs;
        let mut args = vec![
            "create".to_string(),
            "--name".to_string(),
            inputs.name.clone(),
            "--driver".to_string(),
            inputs.driver.to_string(),
        ];

        if self.gate.supports(Feature::DriverOpts) {
            push_driver_opts(&mut args, &inputs.driver_opts);
            push_buildkitd_flags(&mut args, &inputs.buildkitd_flags, &inputs.driver);
        }

        if !inputs.platforms.is_empty() {
            args.push("--platform".to_string());
            args.push(inputs.platforms.join(","));
        }

        if inputs.use_builder {
            args.push("--use".to_string());
        }

        let config =
            resolve_config(&inputs.buildkitd_config, self.registry_host, self.toolkit).await?;
        args.push("--config".to_string());
        args.push(config);

        // Positional, must stay last
        if !inputs.endpoint.is_empty() {
            args.push(inputs.endpoint.clone());
        }

        Ok(args)
    }

    /// Arguments for appending `node` to the builder
    pub fn append_args(&self, node: &Node) -> Vec<String> {
        let inputs = self.inputs;
        let mut args = vec![
            "create".to_string(),
            "--name".to_string(),
            inputs.name.clone(),
            "--append".to_string(),
        ];

        if let Some(name) = non_empty(&node.name) {
            args.push("--node".to_string());
            args.push(name.to_string());
        } else if inputs.driver.is_kubernetes() && self.gate.supports(Feature::NodeAutoName) {
            args.push("--node".to_string());
            args.push(format!("node-{}", self.ids.generate()));
        }

        if let Some(driver_opts) = &node.driver_opts {
            if self.gate.supports(Feature::DriverOpts) {
                push_driver_opts(&mut args, driver_opts);
                let flags = node.buildkitd_flags.as_deref().unwrap_or_default();
                push_buildkitd_flags(&mut args, flags, &inputs.driver);
            }
        }

        if let Some(platforms) = non_empty(&node.platforms) {
            args.push("--platform".to_string());
            args.push(platforms.to_string());
        }

        if let Some(endpoint) = non_empty(&node.endpoint) {
            args.push(endpoint.to_string());
        }

        args
    }

    /// Arguments for `buildx inspect --bootstrap`
    pub fn inspect_args(&self) -> Vec<String> {
        let mut args = vec!["inspect".to_string(), "--bootstrap".to_string()];
        if self.gate.supports(Feature::InspectBuilder) {
            args.push("--builder".to_string());
            args.push(self.inputs.name.clone());
        }
        args
    }
}

fn push_driver_opts(args: &mut Vec<String>, driver_opts: &[String]) {
    for opt in driver_opts {
        args.push("--driver-opt".to_string());
        args.push(opt.clone());
    }
}

/// Explicit flags win; otherwise drivers running their own buildkitd get
/// the default entitlements.
fn push_buildkitd_flags(args: &mut Vec<String>, flags: &str, driver: &Driver) {
    if !flags.is_empty() {
        args.push("--buildkitd-flags".to_string());
        args.push(flags.to_string());
    } else if driver.supports_default_buildkitd_flags() {
        args.push("--buildkitd-flags".to_string());
        args.push(DEFAULT_BUILDKITD_FLAGS.to_string());
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
