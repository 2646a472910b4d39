//! Buildx version gating
//!
//! Every version-dependent flag is named in [`Feature`] together with the
//! semver range the installed buildx must satisfy. An unknown or unparsable
//! buildx version satisfies nothing, so older or exotic binaries simply
//! skip newer flags.

use crate::inputs::Inputs;
use crate::toolkit::Toolkit;
use semver::{Version, VersionReq};
use std::fmt;
use tracing::debug;

/// Version-gated buildx capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// `--driver-opt` and `--buildkitd-flags` on `create`
    DriverOpts,
    /// Kubernetes nodes need an explicit generated `--node` name
    NodeAutoName,
    /// `inspect --builder <name>`
    InspectBuilder,
}

impl Feature {
    /// Semver range the buildx version must satisfy
    pub fn range(&self) -> &'static str {
        match self {
            Self::DriverOpts => ">=0.3.0",
            Self::NodeAutoName => "<0.11.0",
            Self::InspectBuilder => ">=0.4.0",
        }
    }
}

/// Detected buildx version, evaluated against semver ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionGate {
    version: Option<Version>,
}

impl VersionGate {
    /// Gate for a reported version string such as `v0.12.0` or `0.12.0`
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let version = Version::parse(trimmed).ok();
        if version.is_none() {
            debug!("Unparsable buildx version {:?}, gated features disabled", raw);
        }
        Self { version }
    }

    /// Gate with no known version; satisfies no range
    pub fn unknown() -> Self {
        Self { version: None }
    }

    /// Query the toolkit for the installed version.
    ///
    /// Lookup failures are not fatal: the gate becomes unknown.
    pub async fn detect(toolkit: &dyn Toolkit) -> Self {
        match toolkit.buildx_version().await {
            Ok(raw) => {
                debug!("Detected buildx version {}", raw);
                Self::parse(&raw)
            }
            Err(e) => {
                debug!("Buildx version lookup failed: {}", e);
                Self::unknown()
            }
        }
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn supports(&self, feature: Feature) -> bool {
        self.satisfies(feature.range())
    }

    /// Check an arbitrary semver range.
    ///
    /// Pre-release tags are ignored, so `0.12.0-rc1` counts as `0.12.0`.
    pub fn satisfies(&self, range: &str) -> bool {
        let Some(version) = &self.version else {
            return false;
        };
        let Ok(req) = VersionReq::parse(range) else {
            return false;
        };
        let release = Version::new(version.major, version.minor, version.patch);
        req.matches(&release)
    }
}

impl fmt::Display for VersionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("unknown"),
        }
    }
}

/// Version tag used to pick the buildx binary to install.
///
/// The cloud driver ships its own buildx builds tagged `cloud:<v>` or
/// `lab:<v>`; every other driver uses the version as given.
pub fn resolve_reported_version(inputs: &Inputs) -> String {
    let version = inputs.version.as_str();
    if !inputs.driver.is_cloud() {
        return version.to_string();
    }
    if version.is_empty() || version == "latest" {
        "cloud:latest".to_string()
    } else if version.starts_with("cloud:") || version.starts_with("lab:") {
        version.to_string()
    } else {
        format!("cloud:{}", version)
    }
}
