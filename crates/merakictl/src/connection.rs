//! Connection management for Dashboard clients

use std::path::PathBuf;
use std::sync::Arc;

use merakictl_core::client::API_KEY_ENV;
use merakictl_core::{Config, ForwardingAdapter, HttpDashboardClient};
use tracing::{debug, info, trace};

use crate::error::Result as CliResult;

/// Builds authenticated clients from the environment or a profile
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl ConnectionManager {
    pub fn with_config_path(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Save the configuration to the appropriate location
    pub fn save_config(&self) -> CliResult<()> {
        match &self.config_path {
            Some(path) => self.config.save_to_path(path)?,
            None => self.config.save()?,
        }
        Ok(())
    }

    /// Create a Dashboard client.
    ///
    /// With no explicit profile and no `--config-file`, a set
    /// `MERAKI_DASHBOARD_API_KEY` wins over the stored profiles. An explicit
    /// config file means only that file is consulted for the profile.
    pub fn create_client(&self, profile_name: Option<&str>) -> CliResult<HttpDashboardClient> {
        debug!("Creating Dashboard client");
        trace!("Profile name: {:?}", profile_name);

        let use_env_vars = self.config_path.is_none() && profile_name.is_none();
        let env_api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if use_env_vars && env_api_key.is_some() {
            info!("Using Dashboard credentials from {}", API_KEY_ENV);
            return Ok(HttpDashboardClient::from_env()?);
        }

        let resolved_profile_name = self.config.resolve_profile(profile_name)?;
        info!("Using Dashboard profile: {}", resolved_profile_name);

        let profile = self.config.profile(&resolved_profile_name)?;
        Ok(profile.build_client()?)
    }

    /// Forwarding adapter over a freshly built client
    pub fn create_adapter(
        &self,
        profile_name: Option<&str>,
    ) -> CliResult<ForwardingAdapter<HttpDashboardClient>> {
        let client = self.create_client(profile_name)?;
        Ok(ForwardingAdapter::new(Arc::new(client)))
    }
}
