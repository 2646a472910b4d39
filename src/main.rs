//! buildx-setup CLI entry point
//!
//! Dispatches to subcommands. Argument lists go to stdout, logs to stderr.

use buildx_setup::cli::{commands, Cli, Commands, Context};
use buildx_setup::error::SetupResult;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> SetupResult<()> {
    let cli = Cli::parse();

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("buildx_setup=warn"),
        1 => EnvFilter::new("buildx_setup=info"),
        _ => EnvFilter::new("buildx_setup=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let ctx = Context::load(&cli).await?;

    match cli.command {
        Commands::Create => commands::create(&ctx).await,
        Commands::Append(args) => commands::append(args, &ctx).await,
        Commands::Inspect => commands::inspect(&ctx).await,
        Commands::Name => commands::name(&ctx).await,
        Commands::Version => commands::version(&ctx).await,
        Commands::Config => commands::config(&ctx).await,
    }
}
