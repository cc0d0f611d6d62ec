use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::Config;
use crate::ui::prompt_remove_profile_confirmation;

pub async fn remove_command(name: String, force: bool) -> Result<()> {
    info!("Removing profile: {}", name);

    let mut config = Config::load()?;

    if config.get_profile(&name).is_none() {
        println!("Profile '{}' not found.", name);
        println!("Available profiles:");
        for profile in config.list_profiles() {
            println!("  ○ {}", profile);
        }
        return Ok(());
    }

    if config.get_current_profile_name() == Some(&name) {
        println!("{} Warning: '{}' is the current profile", "⚠".yellow(), name);
    }

    if !force && !prompt_remove_profile_confirmation(&name)? {
        println!("Removal cancelled.");
        return Ok(());
    }

    config.remove_profile(&name)?;
    println!("{} Profile '{}' removed", "✓".green(), name);

    match config.get_current_profile_name() {
        Some(current) => println!("Current profile: {}", current),
        None => println!("No current profile. Run 'databricks-sp profile select' to choose one."),
    }

    Ok(())
}
