use super::commands::GroupCommands;
use super::commands::PrincipalCommands;
use super::commands::ProfileCommands;
use super::commands::ProvisionArgs;
use super::commands::QueryCommands;
use super::commands::TokenCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "databricks-sp")]
#[command(about = "Provision Azure Databricks service principals and their access tokens")]
pub struct Cli {
    /// Profile to use instead of the current one
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Workspace and service principal profile management
    Profile(ProfileCommands),
    /// Create, list and remove workspace service principals
    Principal(PrincipalCommands),
    /// Inspect workspace groups
    Group(GroupCommands),
    /// Directory and personal access tokens of the service principal
    Token(TokenCommands),
    /// Run SQL with a personal access token
    Query(QueryCommands),
    /// Create the principal, mint its token and optionally run a test query
    Provision(ProvisionArgs),
}
