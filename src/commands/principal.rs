use anyhow::Result;
use colored::Colorize;
use log::info;

use super::group::resolve_group_ids;
use super::print_json;
use super::session::{Session, admin_token};
use crate::api::ApiError;
use crate::cli::commands::{PrincipalCommands, PrincipalSubcommands};
use crate::ui::prompt_remove_principal_confirmation;

pub async fn principal_command(args: PrincipalCommands, profile: Option<&str>) -> Result<()> {
    let mut session = Session::open(profile)?;

    match args.command {
        PrincipalSubcommands::Create {
            admin_token: token,
            groups,
        } => {
            let token = admin_token(token)?;
            if !groups.is_empty() {
                let group_ids = resolve_group_ids(&session.client, &token, groups).await?;
                session.client.set_group_ids(group_ids);
            }
            let principal = session.client.create_principal(&token).await?;
            print_json(&principal)?;
            println!(
                "{} Service principal '{}' added with id {}",
                "✓".green(),
                session.client.config().display_name,
                principal.id()
            );
        }
        PrincipalSubcommands::List {
            display_name,
            admin_token: token,
        } => {
            let token = admin_token(token)?;
            match display_name {
                Some(name) => {
                    let principal = session
                        .client
                        .find_principal(&token, &name)
                        .await?
                        .ok_or(ApiError::PrincipalNotFound(name))?;
                    print_json(&principal)?;
                }
                None => {
                    let listing = session.client.list_principals(&token).await?;
                    if listing.resources.is_empty() {
                        println!("No service principals in this workspace.");
                        return Ok(());
                    }
                    for sp in &listing.resources {
                        println!(
                            "  {}  {}  {}",
                            sp.id().bold(),
                            sp.display_name().unwrap_or("-"),
                            sp.application_id().unwrap_or("-")
                        );
                    }
                    println!("{} service principal(s)", listing.resources.len());
                }
            }
        }
        PrincipalSubcommands::Remove {
            id,
            admin_token: token,
            force,
        } => {
            let token = admin_token(token)?;

            if !force && !prompt_remove_principal_confirmation(&id)? {
                println!("Removal cancelled.");
                return Ok(());
            }

            let status = session.client.remove_principal(&token, Some(&id)).await?;
            info!("Service principal removed with status {}", status);
            println!("{} Service principal removed ({})", "✓".green(), status);
        }
    }

    Ok(())
}
