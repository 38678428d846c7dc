//! API key storage with optional keyring support
//!
//! A stored key is one of:
//! - a plaintext value in the config file
//! - a `keyring:<name>` reference into the OS keyring (`secure-storage` feature)
//!
//! An environment variable, when set, takes precedence over both.

use super::error::{ConfigError, Result};
use std::env;

/// Prefix marking a value as a keyring reference
const KEYRING_PREFIX: &str = "keyring:";

/// Service name for keyring entries
#[cfg(feature = "secure-storage")]
const SERVICE_NAME: &str = "merakictl";

/// Where new credentials are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStorage {
    #[cfg(feature = "secure-storage")]
    Keyring,
    Plaintext,
}

/// Resolves and stores API keys
#[derive(Debug, Clone)]
pub struct CredentialStore {
    storage: CredentialStorage,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::plaintext()
    }
}

impl CredentialStore {
    /// Store that keeps credentials in the config file
    pub fn plaintext() -> Self {
        Self {
            storage: CredentialStorage::Plaintext,
        }
    }

    /// Store that writes credentials to the OS keyring
    #[cfg(feature = "secure-storage")]
    pub fn keyring() -> Self {
        Self {
            storage: CredentialStorage::Keyring,
        }
    }

    pub fn storage(&self) -> CredentialStorage {
        self.storage
    }

    /// Store `value` and return what should be written to the config file.
    ///
    /// For the keyring backend that is a `keyring:<key>` reference; for
    /// plaintext it is the value itself.
    pub fn store_credential(&self, key: &str, value: &str) -> Result<String> {
        match self.storage {
            #[cfg(feature = "secure-storage")]
            CredentialStorage::Keyring => {
                let entry = keyring::Entry::new(SERVICE_NAME, key)
                    .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
                entry.set_password(value).map_err(|e| {
                    ConfigError::KeyringError(format!(
                        "Failed to store credential in keyring: {}",
                        e
                    ))
                })?;
                Ok(format!("{}{}", KEYRING_PREFIX, key))
            }
            CredentialStorage::Plaintext => {
                let _ = key;
                Ok(value.to_string())
            }
        }
    }

    /// Resolve a stored value.
    ///
    /// Resolution order:
    /// 1. `env_var`, when given and set
    /// 2. the keyring, for `keyring:` references
    /// 3. the value itself
    pub fn get_credential(&self, value: &str, env_var: Option<&str>) -> Result<String> {
        if let Some(var) = env_var
            && let Ok(env_value) = env::var(var)
            && !env_value.is_empty()
        {
            return Ok(env_value);
        }

        let Some(key) = value.strip_prefix(KEYRING_PREFIX) else {
            return Ok(value.to_string());
        };

        #[cfg(feature = "secure-storage")]
        {
            let entry = keyring::Entry::new(SERVICE_NAME, key)
                .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
            entry.get_password().map_err(|e| {
                ConfigError::KeyringError(format!(
                    "Failed to retrieve credential '{}' from keyring: {}",
                    key, e
                ))
            })
        }
        #[cfg(not(feature = "secure-storage"))]
        {
            Err(ConfigError::CredentialError(format!(
                "'{}' references the keyring but the secure-storage feature is not enabled",
                key
            )))
        }
    }

    /// Remove a keyring entry; a no-op for plaintext values
    pub fn delete_credential(&self, value: &str) -> Result<()> {
        let Some(key) = value.strip_prefix(KEYRING_PREFIX) else {
            return Ok(());
        };

        #[cfg(feature = "secure-storage")]
        {
            let entry = keyring::Entry::new(SERVICE_NAME, key)
                .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(ConfigError::KeyringError(format!(
                    "Failed to delete credential from keyring: {}",
                    e
                ))),
            }
        }
        #[cfg(not(feature = "secure-storage"))]
        {
            let _ = key;
            Ok(())
        }
    }

    pub fn is_keyring_reference(value: &str) -> bool {
        value.starts_with(KEYRING_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_roundtrip() {
        let store = CredentialStore::plaintext();
        let stored = store.store_credential("work", "0123abcd").unwrap();
        assert_eq!(stored, "0123abcd");
        assert_eq!(store.get_credential(&stored, None).unwrap(), "0123abcd");
    }

    #[test]
    #[serial_test::serial]
    fn test_env_var_override() {
        unsafe {
            env::set_var("MERAKICTL_TEST_CREDENTIAL", "from-env");
        }

        let store = CredentialStore::default();
        let result = store
            .get_credential("from-file", Some("MERAKICTL_TEST_CREDENTIAL"))
            .unwrap();
        assert_eq!(result, "from-env");

        unsafe {
            env::remove_var("MERAKICTL_TEST_CREDENTIAL");
        }

        let result = store
            .get_credential("from-file", Some("MERAKICTL_TEST_CREDENTIAL"))
            .unwrap();
        assert_eq!(result, "from-file");
    }

    #[test]
    fn test_keyring_reference_detection() {
        assert!(CredentialStore::is_keyring_reference("keyring:work"));
        assert!(!CredentialStore::is_keyring_reference("0123abcd"));
    }

    #[cfg(not(feature = "secure-storage"))]
    #[test]
    fn test_keyring_reference_without_feature() {
        let store = CredentialStore::default();
        let err = store.get_credential("keyring:work", None).unwrap_err();
        assert!(err.to_string().contains("secure-storage"));
        assert!(store.delete_credential("keyring:work").is_ok());
    }
}
