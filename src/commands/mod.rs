pub mod group;
pub mod principal;
pub mod profile;
pub mod provision;
pub mod query;
pub mod session;
pub mod token;

use anyhow::Result;
use serde::Serialize;

pub use group::group_command;
pub use principal::principal_command;
pub use profile::profile_command;
pub use provision::provision_command;
pub use query::query_command;
pub use token::token_command;

/// Pretty-print a JSON payload to stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
