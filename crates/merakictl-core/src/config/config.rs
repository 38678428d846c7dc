//! Configuration file handling
//!
//! Configuration is stored in TOML with one table per named profile:
//!
//! ```toml
//! default_profile = "work"
//!
//! [profiles.work]
//! api_key = "${MERAKI_WORK_KEY}"
//! organization_id = "549236"
//!
//! [profiles.work.resilience.retry]
//! maximum_retries = 4
//! ```

#[cfg(target_os = "macos")]
use directories::BaseDirs;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::credential::CredentialStore;
use super::error::{ConfigError, Result};
use super::resilience::ResilienceConfig;
use crate::client::{
    API_BASE_URL_ENV, API_KEY_ENV, DEFAULT_BASE_URL, DashboardClientBuilder, HttpDashboardClient,
};

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Profile used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// One Dashboard account
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Profile {
    /// API key, or a `keyring:` reference
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application identifier appended to the User-Agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller: Option<String>,
    /// Organization used when a command needs one and none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resilience: Option<ResilienceConfig>,
}

impl Profile {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            caller: None,
            organization_id: None,
            resilience: None,
        }
    }

    /// Resolve the API key: `MERAKI_DASHBOARD_API_KEY`, then the keyring,
    /// then the stored value with `${VAR}` references expanded
    pub fn resolve_api_key(&self) -> Result<String> {
        CredentialStore::default()
            .get_credential(&expand_env_vars(&self.api_key), Some(API_KEY_ENV))
            .map_err(|e| ConfigError::CredentialError(format!("Failed to resolve API key: {}", e)))
    }

    /// Base URL with the `MERAKI_DASHBOARD_API_BASE_URL` override applied
    pub fn resolve_base_url(&self) -> String {
        std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| expand_env_vars(&self.base_url))
    }

    /// Resilience settings, falling back to the defaults
    pub fn resilience(&self) -> ResilienceConfig {
        self.resilience.clone().unwrap_or_default()
    }

    /// Client builder configured from this profile
    pub fn client_builder(&self) -> Result<DashboardClientBuilder> {
        let resilience = self.resilience();
        let mut builder = HttpDashboardClient::builder()
            .api_key(self.resolve_api_key()?)
            .base_url(self.resolve_base_url())
            .timeout(resilience.timeout())
            .retry_policy(resilience.retry.to_retry_policy());
        if let Some(caller) = &self.caller {
            builder = builder.caller(expand_env_vars(caller));
        }
        Ok(builder)
    }

    /// Build an HTTP client from this profile
    pub fn build_client(&self) -> crate::Result<HttpDashboardClient> {
        Ok(self.client_builder()?.build()?)
    }
}

impl Config {
    /// Look up a profile by name
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Resolve the profile name to use.
    ///
    /// An explicit name must exist. Otherwise the default profile is used,
    /// then the alphabetically first profile.
    pub fn resolve_profile(&self, explicit_profile: Option<&str>) -> Result<String> {
        if let Some(name) = explicit_profile {
            self.profile(name)?;
            return Ok(name.to_string());
        }

        if let Some(default) = &self.default_profile {
            return Ok(default.clone());
        }

        self.list_profiles()
            .first()
            .map(|(name, _)| (*name).clone())
            .ok_or_else(|| ConfigError::NoProfiles {
                suggestion: format!(
                    "Set {} or use 'merakictl profile set' to create a profile.",
                    API_KEY_ENV
                ),
            })
    }

    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path; a missing file is an empty config
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path, creating parent directories
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile, clearing the default if it pointed at it
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// List all profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Get the path to the configuration file
    ///
    /// On macOS an existing `~/.config/merakictl/` directory is preferred over
    /// `~/Library/Application Support/com.meraki.merakictl/`.
    ///
    /// On Linux: ~/.config/merakictl/config.toml
    /// On Windows: %APPDATA%\meraki\merakictl\config\config.toml
    pub fn config_path() -> Result<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            if let Some(base_dirs) = BaseDirs::new() {
                let linux_style_dir = base_dirs.home_dir().join(".config").join("merakictl");
                if linux_style_dir.exists() {
                    return Ok(linux_style_dir.join("config.toml"));
                }
            }
        }

        let proj_dirs =
            ProjectDirs::from("com", "meraki", "merakictl").ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

/// Expand `${VAR}` and `${VAR:-default}` references in a profile value.
///
/// Profiles keep the references as written, so saving never writes a
/// resolved secret back to disk. Unset variables without a default are left
/// as written.
fn expand_env_vars(value: &str) -> String {
    shellexpand::env_with_context_no_errors(value, |var| std::env::var(var).ok()).to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
