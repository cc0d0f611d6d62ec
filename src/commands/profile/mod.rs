pub mod remove;
pub mod select;
pub mod setup;
pub mod status;

pub use remove::remove_command;
pub use select::select_command;
pub use setup::{SetupOptions, setup_command};
pub use status::{list_command, status_command};

use anyhow::Result;

use crate::cli::commands::{ProfileCommands, ProfileSubcommands};

pub async fn profile_command(args: ProfileCommands) -> Result<()> {
    match args.command {
        ProfileSubcommands::Setup {
            name,
            workspace_id,
            client_id,
            tenant_id,
            application_secret,
            display_name,
            from_env,
            from_env_file,
        } => {
            setup_command(SetupOptions {
                name,
                workspace_id,
                client_id,
                tenant_id,
                application_secret,
                display_name,
                from_env,
                from_env_file,
            })
            .await
        }
        ProfileSubcommands::Select { name } => select_command(name).await,
        ProfileSubcommands::Remove { name, force } => remove_command(name, force).await,
        ProfileSubcommands::List => list_command().await,
        ProfileSubcommands::Status => status_command().await,
    }
}
