use anyhow::Result;
use dialoguer::{Input, Password, Select};

use crate::auth::credentials::Credentials;

pub fn prompt_profile_name(default_name: Option<String>) -> Result<String> {
    if let Some(name) = default_name {
        Ok(name)
    } else {
        let name = Input::<String>::new()
            .with_prompt("Profile name (e.g., 'dev', 'prod')")
            .interact()?;
        Ok(name)
    }
}

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_overwrite_confirmation(profile: &str) -> Result<bool> {
    prompt_confirmation(&format!("Profile '{}' already exists. Overwrite?", profile), false)
}

pub fn prompt_remove_profile_confirmation(profile: &str) -> Result<bool> {
    prompt_confirmation(&format!("Remove profile '{}'?", profile), false)
}

pub fn prompt_remove_principal_confirmation(id: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Remove service principal '{}' from the workspace?", id),
        false,
    )
}

fn input_or(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact()?),
    }
}

pub fn prompt_credentials(
    workspace_id: Option<String>,
    client_id: Option<String>,
    tenant_id: Option<String>,
    application_secret: Option<String>,
    display_name: Option<String>,
) -> Result<Credentials> {
    let workspace_id = input_or(workspace_id, "Workspace id (e.g., adb-5234234234234.0)")?;
    let client_id = input_or(client_id, "Azure AD Application Client ID")?;
    let tenant_id = input_or(tenant_id, "Azure AD Tenant ID")?;

    let application_secret = if let Some(s) = application_secret {
        s
    } else {
        Password::new()
            .with_prompt("Azure AD Application Client Secret")
            .interact()?
    };

    let display_name = input_or(display_name, "Service principal display name")?;

    Ok(Credentials::from_command_line(
        workspace_id,
        client_id,
        tenant_id,
        application_secret,
        display_name,
    ))
}

pub fn prompt_profile_selection(names: &[String], current: Option<&String>) -> Result<String> {
    let items: Vec<String> = names
        .iter()
        .map(|name| {
            if current == Some(name) {
                format!("{} (current)", name)
            } else {
                name.clone()
            }
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Select profile")
        .items(&items)
        .interact()?;

    Ok(names[selection].clone())
}
