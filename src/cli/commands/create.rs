//! Create command - arguments for `buildx create`

use crate::builder::ArgsBuilder;
use crate::cli::Context;
use crate::error::SetupResult;
use tracing::info;

/// Execute the create command
pub async fn execute(ctx: &Context) -> SetupResult<()> {
    let inputs = ctx.resolved_inputs().await?;
    let gate = ctx.version_gate().await;
    info!("Create args for builder {} (buildx {})", inputs.name, gate);

    let args = ArgsBuilder::new(&inputs, &gate, ctx.toolkit())
        .with_registry_host(ctx.registry_host())
        .create_args()
        .await?;

    ctx.emit(&args)
}
