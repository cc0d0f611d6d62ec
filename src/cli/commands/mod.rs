pub mod group;
pub mod principal;
pub mod profile;
pub mod provision;
pub mod query;
pub mod token;

pub use group::{GroupCommands, GroupSubcommands};
pub use principal::{GroupArgs, PrincipalCommands, PrincipalSubcommands};
pub use profile::{ProfileCommands, ProfileSubcommands};
pub use provision::ProvisionArgs;
pub use query::{QueryCommands, QuerySubcommands};
pub use token::{TokenCommands, TokenSubcommands};
