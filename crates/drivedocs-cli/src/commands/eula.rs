use anyhow::Result;
use colored::Colorize;

use drivedocs_models::EulaStatus;

use crate::cli::{Cli, EulaCommands};
use crate::config::CliConfig;
use crate::setup;

pub async fn run(cli: &Cli, config: &CliConfig, command: &EulaCommands) -> Result<()> {
    let app = setup::prepare(cli, config)?;

    match command {
        EulaCommands::Status => match app.gate.status().await? {
            EulaStatus::Accepted => println!("{} accepted", "EULA:".bold()),
            EulaStatus::Pending => {
                println!("{} pending", "EULA:".bold());
                println!("Document commands are blocked until you run `drivedocs eula accept`.");
            }
        },
        EulaCommands::Accept => {
            app.gate.accept().await?;
            println!("End-user license agreement accepted.");
        }
        EulaCommands::Decline => {
            app.gate.decline();
            println!("End-user license agreement declined; leaving DriveDocs.");
        }
    }
    Ok(())
}
