//! Version command - print the buildx version tag to install

use crate::cli::Context;
use crate::error::SetupResult;
use crate::version::resolve_reported_version;

/// Execute the version command
pub async fn execute(ctx: &Context) -> SetupResult<()> {
    println!("{}", resolve_reported_version(ctx.inputs()));
    Ok(())
}
