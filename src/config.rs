use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::ClientConfig;
use crate::api::constants::DEFAULT_PAT_COMMENT;
use crate::query::statement::DEFAULT_WAIT_TIMEOUT;

/// Service principal and workspace a profile provisions into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub workspace_id: String,
    pub client_id: String,
    pub tenant_id: String,
    pub application_secret: String,
    pub display_name: String,
    /// Overrides `https://{workspace_id}.azuredatabricks.net`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_url: Option<String>,
}

impl Profile {
    pub fn client_config(&self, settings: &Settings) -> ClientConfig {
        let config = ClientConfig::new(
            &self.workspace_id,
            &self.client_id,
            &self.tenant_id,
            &self.application_secret,
            &self.display_name,
        )
        .with_pat_comment(&settings.pat_comment)
        .with_pat_lifetime(settings.pat_lifetime_seconds);

        match &self.workspace_url {
            Some(url) => config.with_workspace_host(url),
            None => config,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_pat_comment")]
    pub pat_comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pat_lifetime_seconds: Option<u64>,
    #[serde(default = "default_wait_timeout")]
    pub statement_wait_timeout: String,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_pat_comment() -> String {
    DEFAULT_PAT_COMMENT.to_string()
}

fn default_wait_timeout() -> String {
    DEFAULT_WAIT_TIMEOUT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            pat_comment: default_pat_comment(),
            pat_lifetime_seconds: None,
            statement_wait_timeout: default_wait_timeout(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("databricks-sp")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".databricks-sp")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

            toml::from_str::<Config>(&config_content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?
        } else {
            info!("Config file doesn't exist, using defaults");
            Self::default()
        };

        debug!("Loaded config with {} profiles", config.profiles.len());
        config.path = Some(config_path.to_path_buf());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => Self::get_config_path()?,
        };
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_profile(&mut self, name: String, profile: Profile) -> Result<()> {
        info!("Adding profile: {}", name);
        self.profiles.insert(name.clone(), profile);

        // First profile becomes the current one
        if self.current_profile.is_none() {
            info!("Set {} as current profile", name);
            self.current_profile = Some(name);
        }

        self.save()
    }

    pub fn get_current_profile(&self) -> Option<&Profile> {
        let current = self.current_profile.as_ref()?;
        self.profiles.get(current)
    }

    pub fn get_current_profile_name(&self) -> Option<&String> {
        self.current_profile.as_ref()
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn set_current_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            anyhow::bail!("Profile '{}' not found", name);
        }

        info!("Setting current profile to: {}", name);
        self.current_profile = Some(name);
        self.save()
    }

    pub fn list_profiles(&self) -> Vec<&String> {
        self.profiles.keys().collect()
    }

    pub fn remove_profile(&mut self, name: &str) -> Result<()> {
        if self.profiles.remove(name).is_none() {
            anyhow::bail!("Profile '{}' not found", name);
        }
        info!("Removed profile: {}", name);

        if self.current_profile.as_deref() == Some(name) {
            warn!("Removed current profile, clearing current selection");
            self.current_profile = None;
        }

        self.save()
    }
}
