use anyhow::Result;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::setup;

pub async fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let app = setup::prepare(cli, config)?;
    let database_config = app.service.database_config(&[]).await?;

    println!("Database: {}", app.session.database);
    println!(
        "Downloads: {}",
        if database_config.restrict_download { "restricted" } else { "allowed" }
    );
    Ok(())
}
