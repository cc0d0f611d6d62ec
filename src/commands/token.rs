use anyhow::Result;
use colored::Colorize;

use super::print_json;
use super::session::Session;
use crate::cli::commands::{TokenCommands, TokenSubcommands};

pub async fn token_command(args: TokenCommands, profile: Option<&str>) -> Result<()> {
    let mut session = Session::open(profile)?;

    match args.command {
        TokenSubcommands::Directory { raw } => {
            let token = session.client.fetch_directory_token().await?;
            match session.client.ad_token_response() {
                Some(response) if raw => print_json(response)?,
                _ => println!("{}", token),
            }
        }
        TokenSubcommands::Create => {
            let pat = session.client.fetch_personal_access_token().await?;
            eprintln!("{} Personal access token created", "✓".green());
            println!("{}", pat);
        }
        TokenSubcommands::List => {
            let tokens = session.client.list_personal_access_tokens().await?;
            print_json(&tokens)?;
        }
    }

    Ok(())
}
