//! Name command - print the resolved builder name

use crate::cli::Context;
use crate::error::SetupResult;

/// Execute the name command
pub async fn execute(ctx: &Context) -> SetupResult<()> {
    let inputs = ctx.resolved_inputs().await?;
    println!("{}", inputs.name);
    Ok(())
}
