use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;
use std::path::Path;

use crate::config::Profile;

pub const WORKSPACE_ID_VAR: &str = "DATABRICKS_WORKSPACE_ID";
pub const CLIENT_ID_VAR: &str = "AZURE_CLIENT_ID";
pub const TENANT_ID_VAR: &str = "AZURE_TENANT_ID";
pub const CLIENT_SECRET_VAR: &str = "AZURE_CLIENT_SECRET";
pub const DISPLAY_NAME_VAR: &str = "SP_DISPLAY_NAME";
pub const WORKSPACE_URL_VAR: &str = "DATABRICKS_WORKSPACE_URL";
pub const ADMIN_TOKEN_VAR: &str = "DATABRICKS_ADMIN_TOKEN";

/// Azure AD application details of a service principal plus the workspace it
/// is provisioned into
#[derive(Debug, Clone)]
pub struct Credentials {
    pub workspace_id: String,
    pub client_id: String,
    pub tenant_id: String,
    pub application_secret: String,
    pub display_name: String,
    pub workspace_url: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Result<Credentials> {
        info!("Importing from environment variables");
        Self::from_lookup("environment", |key| std::env::var(key).ok())
    }

    /// Read credentials from a specific `.env` file without touching the
    /// process environment
    pub fn from_env_file(path: &str) -> Result<Credentials> {
        info!("Importing from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to load .env file '{}'", path))?
        {
            let (key, value) =
                item.with_context(|| format!("Failed to parse .env file '{}'", path))?;
            vars.insert(key, value);
        }

        Self::from_lookup(&format!(".env file {}", path), |key| vars.get(key).cloned())
    }

    pub fn from_command_line(
        workspace_id: String,
        client_id: String,
        tenant_id: String,
        application_secret: String,
        display_name: String,
    ) -> Credentials {
        info!("Using command line parameters");

        Credentials {
            workspace_id,
            client_id,
            tenant_id,
            application_secret,
            display_name,
            workspace_url: None,
        }
    }

    fn from_lookup(source: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} not set in {}", key, source))
        };

        Ok(Credentials {
            workspace_id: require(WORKSPACE_ID_VAR)?,
            client_id: require(CLIENT_ID_VAR)?,
            tenant_id: require(TENANT_ID_VAR)?,
            application_secret: require(CLIENT_SECRET_VAR)?,
            display_name: require(DISPLAY_NAME_VAR)?,
            workspace_url: lookup(WORKSPACE_URL_VAR).filter(|v| !v.is_empty()),
        })
    }
}

impl From<Credentials> for Profile {
    fn from(credentials: Credentials) -> Self {
        Profile {
            workspace_id: credentials.workspace_id,
            client_id: credentials.client_id,
            tenant_id: credentials.tenant_id,
            application_secret: credentials.application_secret,
            display_name: credentials.display_name,
            workspace_url: credentials.workspace_url,
        }
    }
}
