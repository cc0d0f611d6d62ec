use anyhow::Result;
use log::info;
use std::collections::{BTreeMap, HashMap};

use super::session::{Session, admin_token};
use crate::api::ProvisioningClient;
use crate::cli::commands::{GroupArgs, GroupCommands, GroupSubcommands};

pub async fn group_command(args: GroupCommands, profile: Option<&str>) -> Result<()> {
    let session = Session::open(profile)?;

    match args.command {
        GroupSubcommands::List { admin_token: token } => {
            let token = admin_token(token)?;
            let mapping = session.client.fetch_group_id_mapping(&token).await?;

            if mapping.is_empty() {
                println!("No groups in this workspace.");
                return Ok(());
            }

            let sorted: BTreeMap<_, _> = mapping.into_iter().collect();
            let width = sorted.keys().map(|name| name.len()).max().unwrap_or(0);
            for (name, id) in &sorted {
                println!("  {:<width$}  {}", name, id, width = width);
            }
        }
    }

    Ok(())
}

/// Turn `--group` ids and `--group-name` names into group ids. The group
/// listing is only fetched when names were given.
pub async fn resolve_group_ids(
    client: &ProvisioningClient,
    admin_token: &str,
    groups: GroupArgs,
) -> Result<Vec<String>> {
    let GroupArgs {
        mut group_ids,
        group_names,
    } = groups;
    if group_names.is_empty() {
        return Ok(group_ids);
    }

    let mapping = client.fetch_group_id_mapping(admin_token).await?;
    group_ids.extend(ids_for_names(&mapping, &group_names)?);
    info!("Joining groups {:?}", group_ids);
    Ok(group_ids)
}

fn ids_for_names(mapping: &HashMap<String, String>, names: &[String]) -> Result<Vec<String>> {
    names
        .iter()
        .map(|name| {
            mapping
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Group '{}' not found in this workspace", name))
        })
        .collect()
}
