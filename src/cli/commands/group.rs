use clap::{Args, Subcommand};

#[derive(Args)]
pub struct GroupCommands {
    #[command(subcommand)]
    pub command: GroupSubcommands,
}

#[derive(Subcommand)]
pub enum GroupSubcommands {
    /// Show the display name to id mapping of every workspace group
    List {
        /// Workspace admin token (defaults to DATABRICKS_ADMIN_TOKEN)
        #[arg(long)]
        admin_token: Option<String>,
    },
}
