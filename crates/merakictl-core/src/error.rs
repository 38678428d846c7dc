//! Unified error handling for merakictl-core
//!
//! Wraps client and configuration errors with consistent helper methods.
//!
//! # Example
//!
//! ```rust
//! use merakictl_core::{ClientError, CoreError};
//! use merakictl_core::operations::descriptors::GET_DEVICE;
//!
//! let err: CoreError = ClientError::api(&GET_DEVICE, 404, "Device not found").into();
//! assert!(err.is_not_found());
//! assert!(!err.is_retryable());
//! ```

use thiserror::Error;

use crate::client::ClientError;
use crate::config::ConfigError;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Error from a Dashboard client
    #[error("Dashboard API error: {0}")]
    Client(#[from] ClientError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Returns true if this is a "not found" error (404)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::Client(e) if e.is_not_found())
    }

    /// Returns true if this is an authentication/authorization error (401/403)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CoreError::Client(e) if e.is_unauthorized())
    }

    /// Returns true if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, CoreError::Client(e) if e.is_server_error())
    }

    /// Returns true if this is a rate limiting error (429)
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CoreError::Client(e) if e.is_rate_limited())
    }

    /// Returns true if this error is potentially retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::Client(e) if e.is_retryable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::descriptors;

    #[test]
    fn test_core_error_client_helpers_delegate() {
        let err: CoreError = ClientError::api(&descriptors::GET_NETWORK, 401, "Invalid API key").into();
        assert!(err.is_unauthorized());

        let err: CoreError = ClientError::api(&descriptors::GET_NETWORK, 429, "Slow down").into();
        assert!(err.is_rate_limited());
        assert!(err.is_retryable());

        let err: CoreError = ClientError::api(&descriptors::GET_NETWORK, 502, "Bad gateway").into();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_core_error_config() {
        let err: CoreError = ConfigError::ProfileNotFound {
            name: "lab".to_string(),
        }
        .into();
        assert!(!err.is_not_found());
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "Configuration error: Profile 'lab' not found"
        );
    }
}
