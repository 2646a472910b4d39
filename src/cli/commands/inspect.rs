//! Inspect command - arguments for `buildx inspect --bootstrap`

use crate::builder::ArgsBuilder;
use crate::cli::Context;
use crate::error::SetupResult;

/// Execute the inspect command
pub async fn execute(ctx: &Context) -> SetupResult<()> {
    let inputs = ctx.resolved_inputs().await?;
    let gate = ctx.version_gate().await;

    let args = ArgsBuilder::new(&inputs, &gate, ctx.toolkit()).inspect_args();
    ctx.emit(&args)
}
