mod context;
mod database;
mod eula;
mod files;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let config = CliConfig::load();

    match &cli.command {
        // handled in main before dispatch
        Commands::Completions { .. } => Ok(()),
        Commands::Context => context::run(&cli, &config).await,
        Commands::Files { command } => files::run(&cli, &config, command).await,
        Commands::Eula { command } => eula::run(&cli, &config, command).await,
        Commands::Config => database::run(&cli, &config).await,
    }
}
