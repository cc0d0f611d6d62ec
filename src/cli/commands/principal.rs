use clap::{Args, Subcommand};

#[derive(Args)]
pub struct PrincipalCommands {
    #[command(subcommand)]
    pub command: PrincipalSubcommands,
}

#[derive(Subcommand)]
pub enum PrincipalSubcommands {
    /// Add the profile's service principal to the workspace
    Create {
        /// Workspace admin token (defaults to DATABRICKS_ADMIN_TOKEN)
        #[arg(long)]
        admin_token: Option<String>,
        #[command(flatten)]
        groups: GroupArgs,
    },
    /// List service principals, or find one by display name
    List {
        /// Only show the principal with this display name
        #[arg(long)]
        display_name: Option<String>,
        /// Workspace admin token (defaults to DATABRICKS_ADMIN_TOKEN)
        #[arg(long)]
        admin_token: Option<String>,
    },
    /// Remove a service principal from the workspace by id
    Remove {
        /// Principal id as stored in the workspace
        #[arg(long)]
        id: String,
        /// Workspace admin token (defaults to DATABRICKS_ADMIN_TOKEN)
        #[arg(long)]
        admin_token: Option<String>,
        /// Force removal without confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Groups a new principal joins, by id or by display name
#[derive(Args, Default)]
pub struct GroupArgs {
    /// Group id to join (repeatable)
    #[arg(long = "group", value_name = "ID")]
    pub group_ids: Vec<String>,
    /// Group display name to join, resolved to its id (repeatable)
    #[arg(long = "group-name", value_name = "NAME")]
    pub group_names: Vec<String>,
}

impl GroupArgs {
    pub fn is_empty(&self) -> bool {
        self.group_ids.is_empty() && self.group_names.is_empty()
    }
}
