//! Profile configuration for Dashboard clients
//!
// The config subsystem lives in a nested `config` module
#![allow(clippy::module_inception)]
//!
//! Profiles hold the API key and connection settings for one Dashboard
//! account, stored as TOML in the platform config directory.
//!
//! - Multiple named profiles with an optional default
//! - API keys in plaintext, from the environment, or in the OS keyring
//!   (`secure-storage` feature)
//! - `${VAR}` / `${VAR:-default}` references, expanded when a client is built
//! - Per-profile retry and timeout settings

pub mod config;
pub mod credential;
pub mod error;
pub mod resilience;

pub use config::{Config, Profile};
pub use credential::{CredentialStorage, CredentialStore};
pub use error::{ConfigError, Result};
pub use resilience::{ResilienceConfig, RetryConfig};
