use anyhow::Result;
use colored::Colorize;
use log::{error, info};

use crate::api::ProvisioningClient;
use crate::auth::Credentials;
use crate::config::{Config, Profile};
use crate::ui::{prompt_credentials, prompt_overwrite_confirmation, prompt_profile_name};

pub struct SetupOptions {
    pub name: Option<String>,
    pub workspace_id: Option<String>,
    pub client_id: Option<String>,
    pub tenant_id: Option<String>,
    pub application_secret: Option<String>,
    pub display_name: Option<String>,
    pub from_env: bool,
    pub from_env_file: Option<String>,
}

pub async fn setup_command(options: SetupOptions) -> Result<()> {
    info!("Starting profile setup");

    let mut config = Config::load()?;

    let (name, credentials) = if options.from_env {
        let name = options.name.unwrap_or_else(|| "from-env".to_string());
        (name, Credentials::from_env()?)
    } else if let Some(ref path) = options.from_env_file {
        let name = options.name.unwrap_or_else(|| "from-env-file".to_string());
        (name, Credentials::from_env_file(path)?)
    } else if let (
        Some(workspace_id),
        Some(client_id),
        Some(tenant_id),
        Some(application_secret),
        Some(display_name),
    ) = (
        &options.workspace_id,
        &options.client_id,
        &options.tenant_id,
        &options.application_secret,
        &options.display_name,
    ) {
        let name = options.name.unwrap_or_else(|| "cli-setup".to_string());
        let credentials = Credentials::from_command_line(
            workspace_id.clone(),
            client_id.clone(),
            tenant_id.clone(),
            application_secret.clone(),
            display_name.clone(),
        );
        (name, credentials)
    } else {
        info!("Starting interactive setup");

        let name = prompt_profile_name(options.name)?;
        if config.profiles.contains_key(&name) && !prompt_overwrite_confirmation(&name)? {
            println!("Setup cancelled.");
            return Ok(());
        }

        let credentials = prompt_credentials(
            options.workspace_id,
            options.client_id,
            options.tenant_id,
            options.application_secret,
            options.display_name,
        )?;
        (name, credentials)
    };

    let profile = Profile::from(credentials);

    // The directory login only needs the application credentials, so it is a
    // cheap way to catch a wrong tenant or secret before saving.
    println!("Testing directory login...");
    let mut client = ProvisioningClient::new(profile.client_config(&config.settings))?;
    match client.fetch_directory_token().await {
        Ok(_) => println!("{} Directory login successful", "✓".green()),
        Err(e) => {
            error!("Directory login failed during setup: {}", e);
            println!("{} Directory login failed: {}", "✗".red(), e);
            println!("Saving the profile anyway; fix it with 'databricks-sp profile setup'.");
        }
    }

    config.add_profile(name.clone(), profile)?;
    println!("{} Profile '{}' saved", "✓".green(), name);

    if config.get_current_profile_name() == Some(&name) {
        println!("'{}' is the current profile", name);
    }

    Ok(())
}
