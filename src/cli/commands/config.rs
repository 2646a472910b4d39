//! Config command - show the merged buildkitd config

use crate::buildkitd::merged_config;
use crate::cli::Context;
use crate::error::SetupResult;

/// Execute the config command
///
/// Prints what `create` would hand to buildx, without writing any file.
pub async fn execute(ctx: &Context) -> SetupResult<()> {
    let merged = merged_config(&ctx.inputs().buildkitd_config, ctx.registry_host()).await?;
    print!("{}", merged);
    Ok(())
}
