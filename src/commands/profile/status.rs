use anyhow::Result;
use colored::Colorize;
use log::{error, info};

use crate::api::ProvisioningClient;
use crate::config::Config;

pub async fn list_command() -> Result<()> {
    let config = Config::load()?;
    let profiles = config.list_profiles();

    if profiles.is_empty() {
        println!("No profiles configured.");
        println!("Run 'databricks-sp profile setup' to create one.");
        return Ok(());
    }

    for name in profiles {
        if config.get_current_profile_name() == Some(name) {
            println!("  ● {} (current)", name);
        } else {
            println!("  ○ {}", name);
        }
    }
    Ok(())
}

pub async fn status_command() -> Result<()> {
    info!("Executing profile status command");

    let config = Config::load()?;

    println!("Databricks Service Principal Profiles");
    println!("=====================================");

    if config.list_profiles().is_empty() {
        println!("No profiles configured.");
        println!("Run 'databricks-sp profile setup' to create one.");
        return Ok(());
    }

    list_command().await?;

    let (Some(name), Some(profile)) = (
        config.get_current_profile_name(),
        config.get_current_profile(),
    ) else {
        println!("\nNo current profile selected.");
        println!("Run 'databricks-sp profile select' to choose one.");
        return Ok(());
    };

    let client_config = profile.client_config(&config.settings);
    println!("\nCurrent profile: {}", name);
    println!("  Workspace: {}", client_config.host());
    println!("  Client ID: {}", profile.client_id);
    println!("  Tenant ID: {}", profile.tenant_id);
    println!("  Display name: {}", profile.display_name);

    println!("\nTesting directory login...");
    let mut client = ProvisioningClient::new(client_config)?;
    match client.fetch_directory_token().await {
        Ok(_) => {
            info!("Directory login successful");
            println!("{} Directory login successful", "✓".green());
        }
        Err(e) => {
            error!("Directory login failed: {}", e);
            println!("{} Directory login failed: {}", "✗".red(), e);
        }
    }

    Ok(())
}
