use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use super::group::resolve_group_ids;
use super::print_json;
use super::query::print_rows;
use super::session::{Session, admin_token};
use crate::cli::commands::ProvisionArgs;
use crate::query::QueryExecutor;

/// Add the service principal to the workspace, mint its personal access
/// token, show its tokens and optionally prove the token with a query.
pub async fn provision_command(args: ProvisionArgs, profile: Option<&str>) -> Result<()> {
    let mut session = Session::open(profile)?;
    let admin = admin_token(args.admin_token)?;
    info!("Provisioning with profile {}", session.profile_name);

    if !args.groups.is_empty() {
        let group_ids = resolve_group_ids(&session.client, &admin, args.groups).await?;
        session.client.set_group_ids(group_ids);
    }

    println!("Adding service principal to workspace...");
    let principal = session
        .client
        .create_principal(&admin)
        .await
        .context("Failed to add service principal")?;
    println!("{} Service principal id: {}", "✓".green(), principal.id());

    println!("Minting personal access token...");
    let pat = session
        .client
        .fetch_personal_access_token()
        .await
        .context("Failed to create personal access token. Has the principal been granted Contributor on the workspace?")?;
    println!("{} Personal access token created", "✓".green());

    println!("\nTokens of the service principal:");
    let tokens = session.client.list_personal_access_tokens().await?;
    print_json(&tokens)?;

    if let Some(http_path) = args.http_path {
        println!("\nRunning '{}' on {}...", args.query, http_path);
        let rows = session
            .executor()
            .fetch_query(&http_path, &pat, &args.query)
            .await
            .context("Test query failed")?;
        print_rows(&rows, "table")?;
    }

    println!("\nPersonal access token:");
    println!("{}", pat);
    Ok(())
}
