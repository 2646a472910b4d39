//! Append command - arguments for adding nodes to a builder

use crate::builder::ArgsBuilder;
use crate::cli::args::AppendArgs;
use crate::cli::Context;
use crate::error::{SetupError, SetupResult};
use tracing::info;

/// Execute the append command
///
/// Prints one argument list per node: the node given by `--node-*` flags,
/// or every `[[nodes]]` entry of the inputs file.
pub async fn execute(args: AppendArgs, ctx: &Context) -> SetupResult<()> {
    let nodes = match args.node() {
        Some(node) => vec![node],
        None => ctx.nodes().to_vec(),
    };

    if nodes.is_empty() {
        return Err(SetupError::User(
            "No nodes to append: pass --node-* flags or add [[nodes]] to the inputs file"
                .to_string(),
        ));
    }

    let inputs = ctx.resolved_inputs().await?;
    let gate = ctx.version_gate().await;
    let builder = ArgsBuilder::new(&inputs, &gate, ctx.toolkit());

    for node in &nodes {
        info!(
            "Append args for node {} of builder {}",
            node.name.as_deref().unwrap_or("<unnamed>"),
            inputs.name
        );
        ctx.emit(&builder.append_args(node))?;
    }

    Ok(())
}
