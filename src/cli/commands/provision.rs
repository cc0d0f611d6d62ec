use clap::Args;

use super::principal::GroupArgs;

#[derive(Args)]
pub struct ProvisionArgs {
    /// Workspace admin token (defaults to DATABRICKS_ADMIN_TOKEN)
    #[arg(long)]
    pub admin_token: Option<String>,
    #[command(flatten)]
    pub groups: GroupArgs,
    /// HTTP path of a SQL warehouse to run a test query on
    #[arg(long)]
    pub http_path: Option<String>,
    /// Test query to run when --http-path is given
    #[arg(long, default_value = "SHOW DATABASES")]
    pub query: String,
}
