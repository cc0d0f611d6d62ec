use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::Config;
use crate::ui::prompt_profile_selection;

pub async fn select_command(name: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let names: Vec<String> = config.list_profiles().into_iter().cloned().collect();
    if names.is_empty() {
        println!("No profiles configured.");
        println!("Run 'databricks-sp profile setup' to create one.");
        return Ok(());
    }

    let name = match name {
        Some(name) => name,
        None => prompt_profile_selection(&names, config.get_current_profile_name())?,
    };

    info!("Selecting profile: {}", name);
    config.set_current_profile(name.clone())?;
    println!("{} Current profile: {}", "✓".green(), name);
    Ok(())
}
