//! Builder name resolution

use crate::error::SetupResult;
use crate::inputs::Driver;
use crate::toolkit::{IdGenerator, Toolkit};

/// Prefix for generated builder names
pub const BUILDER_NAME_PREFIX: &str = "builder-";

/// Resolve the name of the builder to create or reuse.
///
/// The `docker` driver has no builder of its own: its name is the active
/// Docker context's and `requested` is ignored. Other drivers keep the
/// requested name or get a generated `builder-<id>`.
pub async fn resolve_builder_name(
    requested: Option<&str>,
    driver: &Driver,
    toolkit: &dyn Toolkit,
    ids: &dyn IdGenerator,
) -> SetupResult<String> {
    if driver.is_docker() {
        return toolkit.docker_context().await;
    }

    Ok(match requested.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("{}{}", BUILDER_NAME_PREFIX, ids.generate()),
    })
}
