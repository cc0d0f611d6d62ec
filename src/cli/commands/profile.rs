use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ProfileCommands {
    #[command(subcommand)]
    pub command: ProfileSubcommands,
}

#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Set up a new profile
    Setup {
        /// Name for this profile (e.g., "dev", "prod")
        #[arg(short, long)]
        name: Option<String>,
        /// Databricks workspace id (e.g., adb-5234234234234.0)
        #[arg(long)]
        workspace_id: Option<String>,
        /// Azure AD application (client) id of the service principal
        #[arg(long)]
        client_id: Option<String>,
        /// Azure AD tenant id
        #[arg(long)]
        tenant_id: Option<String>,
        /// Azure AD application secret
        #[arg(long)]
        application_secret: Option<String>,
        /// Display name of the service principal in the workspace
        #[arg(long)]
        display_name: Option<String>,
        /// Import from environment variables
        #[arg(long)]
        from_env: bool,
        /// Import from the specified .env file
        #[arg(long)]
        from_env_file: Option<String>,
    },
    /// Select the current profile
    Select {
        /// Profile name to select
        name: Option<String>,
    },
    /// Remove a profile
    Remove {
        /// Profile name to remove
        name: String,
        /// Force removal without confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List configured profiles
    List,
    /// Show the current profile and test the directory login
    Status,
}
