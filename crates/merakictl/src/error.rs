//! Error types for merakictl

use colored::Colorize;
use merakictl_core::client::API_KEY_ENV;
use merakictl_core::{ClientError, ConfigError, CoreError};
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: profile 'lab' not found
///
///   tip: list available profiles:
///       merakictl profile list
/// ```
pub struct CliDiagnostic {
    message: String,
    tips: Vec<(String, Vec<String>)>,
}

impl CliDiagnostic {
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tips: Vec::new(),
        }
    }

    /// Add a tip with optional example commands.
    pub fn tip(mut self, description: &str, commands: &[&str]) -> Self {
        self.tips.push((
            description.to_string(),
            commands.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        for (description, commands) in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
            for cmd in commands {
                eprintln!("      {}", cmd);
            }
        }
    }
}

/// Main error type for the merakictl application
#[derive(Error, Debug)]
pub enum MerakiCtlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("No profile configured and MERAKI_DASHBOARD_API_KEY is not set")]
    NoProfileConfigured,

    #[error("Unknown operation '{name}'")]
    UnknownOperation { name: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The call reached the adapter and came back as an error mapping
    #[error("{operation} failed: {message}")]
    OperationFailed { operation: String, message: String },

    #[error("File error for '{path}': {message}")]
    FileError { path: String, message: String },

    #[error("Connection error: {message}")]
    ConnectionError { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for merakictl commands
pub type Result<T> = std::result::Result<T, MerakiCtlError>;

impl MerakiCtlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            MerakiCtlError::ProfileNotFound { name } => vec![
                "List available profiles: merakictl profile list".to_string(),
                format!(
                    "Create profile '{}': merakictl profile set {} --api-key <key>",
                    name, name
                ),
            ],
            MerakiCtlError::NoProfileConfigured => vec![
                "Create a profile: merakictl profile set <name> --api-key <key> --default"
                    .to_string(),
                format!("Or export {}=<key>", API_KEY_ENV),
            ],
            MerakiCtlError::UnknownOperation { .. } => vec![
                "List operations: merakictl operations list".to_string(),
                "Names may be snake_case, kebab-case or camelCase".to_string(),
            ],
            MerakiCtlError::InvalidInput { .. } => vec![
                "Check the operation's parameters: merakictl operations show <operation>"
                    .to_string(),
            ],
            MerakiCtlError::OperationFailed { message, .. }
                if message.contains(" 401 ") || message.contains(" 403 ") =>
            {
                vec![
                    "Check the API key: merakictl profile show <profile>".to_string(),
                    "Verify the key has access to this organization".to_string(),
                ]
            }
            MerakiCtlError::OperationFailed { message, .. } if message.contains(" 404 ") => vec![
                "Verify the serial, network or organization ID is correct".to_string(),
                "Check that you're using the correct profile".to_string(),
            ],
            MerakiCtlError::ConnectionError { .. } => vec![
                "Check network connectivity".to_string(),
                "Verify the base URL: merakictl profile show <profile>".to_string(),
            ],
            MerakiCtlError::FileError { path, .. } => vec![
                format!("Check that file exists: {}", path),
                "Verify file permissions are correct".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&self.to_string());

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion, &[]);
        }

        diag.print();
    }
}

impl From<ClientError> for MerakiCtlError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidArgument(message) => MerakiCtlError::InvalidInput { message },
            ClientError::Api { ref operation, .. } => MerakiCtlError::OperationFailed {
                operation: operation.clone(),
                message: err.to_string(),
            },
            other => MerakiCtlError::ConnectionError {
                message: other.to_string(),
            },
        }
    }
}

impl From<ConfigError> for MerakiCtlError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name } => MerakiCtlError::ProfileNotFound { name },
            ConfigError::NoProfiles { .. } => MerakiCtlError::NoProfileConfigured,
            other => MerakiCtlError::Config(other.to_string()),
        }
    }
}

impl From<CoreError> for MerakiCtlError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Client(e) => e.into(),
            CoreError::Config(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for MerakiCtlError {
    fn from(err: serde_json::Error) -> Self {
        MerakiCtlError::InvalidInput {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<anyhow::Error> for MerakiCtlError {
    fn from(err: anyhow::Error) -> Self {
        MerakiCtlError::OutputError {
            message: format!("{:#}", err),
        }
    }
}
