mod cli;
mod commands;
mod completions;
mod config;
mod error;
mod output;
mod setup;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Commands::Completions { shell } = &cli.command {
        completions::generate_completions(*shell);
        return;
    }

    if let Err(err) = commands::dispatch(cli).await {
        error::handle_error(err);
    }
}
