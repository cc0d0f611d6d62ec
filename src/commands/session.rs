use anyhow::{Context, Result};
use log::{debug, info};

use crate::api::{ProvisioningClient, build_http_client};
use crate::auth::Credentials;
use crate::auth::credentials::ADMIN_TOKEN_VAR;
use crate::config::{Config, Profile, Settings};
use crate::query::StatementExecutor;

/// Client for one CLI invocation plus the settings it was built from
pub struct Session {
    pub profile_name: String,
    pub settings: Settings,
    pub client: ProvisioningClient,
}

impl Session {
    /// Resolve the profile to use: `--profile`, then the current profile,
    /// then environment variables.
    pub fn open(profile: Option<&str>) -> Result<Session> {
        let config = Config::load()?;
        let settings = config.settings.clone();

        let (profile_name, profile) = match profile {
            Some(name) => {
                let profile = config
                    .get_profile(name)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Profile '{}' not found", name))?;
                (name.to_string(), profile)
            }
            None => match (config.get_current_profile_name(), config.get_current_profile()) {
                (Some(name), Some(profile)) => (name.clone(), profile.clone()),
                _ => {
                    debug!("No current profile, reading credentials from environment");
                    let credentials = Credentials::from_env().context(
                        "No profile selected. Run 'databricks-sp profile setup' or set the environment variables",
                    )?;
                    ("environment".to_string(), Profile::from(credentials))
                }
            },
        };

        info!(
            "Using profile {} (workspace {})",
            profile_name, profile.workspace_id
        );

        let http = build_http_client(settings.request_timeout(), settings.connect_timeout())?;
        let client = ProvisioningClient::with_http_client(profile.client_config(&settings), http);

        Ok(Session {
            profile_name,
            settings,
            client,
        })
    }

    pub fn executor(&self) -> StatementExecutor {
        StatementExecutor::new(self.client.http_client(), self.client.config().host())
            .with_wait_timeout(&self.settings.statement_wait_timeout)
    }
}

/// Admin token from the command line, falling back to the environment
pub fn admin_token(arg: Option<String>) -> Result<String> {
    match arg {
        Some(token) => Ok(token),
        None => std::env::var(ADMIN_TOKEN_VAR).map_err(|_| {
            anyhow::anyhow!(
                "No admin token given. Pass --admin-token or set {}",
                ADMIN_TOKEN_VAR
            )
        }),
    }
}
