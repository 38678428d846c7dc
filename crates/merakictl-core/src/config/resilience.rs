//! Retry and timeout settings stored in profiles

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::RetryPolicy;

/// Per-profile resilience settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResilienceConfig {
    #[serde(default)]
    pub retry: RetryConfig,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ResilienceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Retry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries per request after the first attempt
    #[serde(default = "default_maximum_retries")]
    pub maximum_retries: u32,

    /// Wait and retry when the API answers 429
    #[serde(default = "default_true")]
    pub wait_on_rate_limit: bool,

    /// Wait for 429 responses without a Retry-After header
    #[serde(default = "default_rate_limit_wait_secs")]
    pub rate_limit_wait_secs: u64,

    #[serde(default = "default_server_error_wait_secs")]
    pub server_error_wait_secs: u64,

    /// Retry other 4xx responses
    #[serde(default)]
    pub retry_4xx_error: bool,

    #[serde(default = "default_retry_4xx_wait_secs")]
    pub retry_4xx_wait_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            maximum_retries: default_maximum_retries(),
            wait_on_rate_limit: true,
            rate_limit_wait_secs: default_rate_limit_wait_secs(),
            server_error_wait_secs: default_server_error_wait_secs(),
            retry_4xx_error: false,
            retry_4xx_wait_secs: default_retry_4xx_wait_secs(),
        }
    }
}

impl RetryConfig {
    pub fn to_retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            maximum_retries: self.maximum_retries,
            wait_on_rate_limit: self.wait_on_rate_limit,
            rate_limit_wait: Duration::from_secs(self.rate_limit_wait_secs),
            server_error_wait: Duration::from_secs(self.server_error_wait_secs),
            retry_4xx_error: self.retry_4xx_error,
            retry_4xx_wait: Duration::from_secs(self.retry_4xx_wait_secs),
        }
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_maximum_retries() -> u32 {
    2
}

fn default_rate_limit_wait_secs() -> u64 {
    60
}

fn default_server_error_wait_secs() -> u64 {
    1
}

fn default_retry_4xx_wait_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_client_policy() {
        assert_eq!(
            RetryConfig::default().to_retry_policy(),
            RetryPolicy::default()
        );
        assert_eq!(ResilienceConfig::default().timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_table_fills_defaults() {
        let config: ResilienceConfig = toml::from_str(
            r#"
timeout_secs = 15

[retry]
maximum_retries = 5
retry_4xx_error = true
"#,
        )
        .unwrap();

        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.retry.maximum_retries, 5);
        assert!(config.retry.retry_4xx_error);
        assert!(config.retry.wait_on_rate_limit);
        assert_eq!(config.retry.rate_limit_wait_secs, 60);
    }
}
