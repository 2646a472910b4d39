//! Per-invocation state shared by all commands

use crate::builder::resolve_builder_name;
use crate::cli::args::{Cli, OutputFormat};
use crate::config::InputsLoader;
use crate::error::SetupResult;
use crate::inputs::{Inputs, Node};
use crate::toolkit::{DockerToolkit, Toolkit, UuidGenerator};
use crate::version::VersionGate;
use tracing::debug;

/// Inputs, nodes and collaborators for one invocation
pub struct Context {
    inputs: Inputs,
    nodes: Vec<Node>,
    registry_host: Option<String>,
    buildx_version: Option<String>,
    format: OutputFormat,
    toolkit: Box<dyn Toolkit>,
}

impl Context {
    /// Load the inputs file, apply CLI/environment overrides and set up the
    /// docker toolkit
    pub async fn load(cli: &Cli) -> SetupResult<Self> {
        let loader = match &cli.inputs {
            Some(path) => InputsLoader::with_path(path.clone()),
            None => InputsLoader::new(),
        };
        let mut file = loader.load().await?;
        cli.input.apply_to(&mut file.inputs);

        let tmp_root = cli.tmp_dir.clone().unwrap_or_else(std::env::temp_dir);
        let toolkit = DockerToolkit::new(cli.docker.clone(), &tmp_root);

        let inputs = file.inputs.into_inputs();
        debug!("Inputs: {:?}", inputs);

        Ok(Self {
            inputs,
            nodes: file.nodes,
            registry_host: cli.registry_host.clone().filter(|h| !h.is_empty()),
            buildx_version: cli.buildx_version.clone(),
            format: cli.format,
            toolkit: Box::new(toolkit),
        })
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Nodes declared in the inputs file
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn registry_host(&self) -> Option<&str> {
        self.registry_host.as_deref()
    }

    pub fn toolkit(&self) -> &dyn Toolkit {
        self.toolkit.as_ref()
    }

    /// Gate from `--buildx-version`, or from the installed buildx
    pub async fn version_gate(&self) -> VersionGate {
        match &self.buildx_version {
            Some(version) => VersionGate::parse(version),
            None => VersionGate::detect(self.toolkit()).await,
        }
    }

    /// Inputs with the builder name resolved
    pub async fn resolved_inputs(&self) -> SetupResult<Inputs> {
        let name = resolve_builder_name(
            Some(self.inputs.name.as_str()),
            &self.inputs.driver,
            self.toolkit(),
            &UuidGenerator,
        )
        .await?;

        Ok(Inputs {
            name,
            ..self.inputs.clone()
        })
    }

    /// Print one argument list in the selected format
    pub fn emit(&self, args: &[String]) -> SetupResult<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(args)?),
            OutputFormat::Lines => {
                for arg in args {
                    println!("{}", arg);
                }
            }
        }
        Ok(())
    }
}
