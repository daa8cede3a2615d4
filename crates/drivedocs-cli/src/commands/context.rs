use anyhow::Result;

use drivedocs_core::resolve_context;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::output;
use crate::setup;

pub async fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let app = setup::prepare(cli, config)?;
    let context = resolve_context(app.gateway.as_ref(), &app.session, &app.selection).await?;
    output::print_context(&context);
    Ok(())
}
