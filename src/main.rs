use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use databricks_sp_cli::{api, auth, config, query};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file (truncated on each run) so stdout only carries command output
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("databricks-sp.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    if dotenvy::dotenv().is_ok() {
        debug!("Loaded .env from working directory");
    }

    let cli = Cli::parse();
    info!("Starting databricks-sp");

    let profile = cli.profile.as_deref();
    match cli.command {
        Commands::Profile(args) => commands::profile_command(args).await?,
        Commands::Principal(args) => commands::principal_command(args, profile).await?,
        Commands::Group(args) => commands::group_command(args, profile).await?,
        Commands::Token(args) => commands::token_command(args, profile).await?,
        Commands::Query(args) => commands::query_command(args, profile).await?,
        Commands::Provision(args) => commands::provision_command(args, profile).await?,
    }

    Ok(())
}
