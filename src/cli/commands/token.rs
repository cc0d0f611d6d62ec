use clap::{Args, Subcommand};

#[derive(Args)]
pub struct TokenCommands {
    #[command(subcommand)]
    pub command: TokenSubcommands,
}

#[derive(Subcommand)]
pub enum TokenSubcommands {
    /// Fetch an Azure AD token for the service principal
    Directory {
        /// Print the full token response instead of the token
        #[arg(long)]
        raw: bool,
    },
    /// Mint a personal access token for the service principal
    Create,
    /// List the service principal's personal access tokens
    List,
}
