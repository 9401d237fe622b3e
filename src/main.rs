use clap::Parser;

use recipe_rs::cli::{self, Cli};
use recipe_rs::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli::load_and_merge_config(&cli)?;

    init_logger(&settings.logger)?;

    cli::execute_command(&cli, settings).await?;
    Ok(())
}
