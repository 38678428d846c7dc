//! Errors raised by Dashboard clients

use reqwest::StatusCode;
use thiserror::Error;

use crate::operations::OperationDescriptor;

/// Error returned by a [`DashboardClient`](super::DashboardClient) call.
///
/// Only [`ClientError::Api`] is a vendor API error: the request reached the
/// Dashboard and was rejected. Every other variant is a local or transport
/// failure.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The Dashboard API answered with a non-success status
    #[error("{tag}, {operation} - {status} {reason}, {message}")]
    Api {
        tag: String,
        operation: String,
        status: u16,
        reason: String,
        message: String,
    },

    /// The request could not be sent or the response could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Arguments could not be turned into a request
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure raised by a custom client implementation
    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// Build an API error for `operation` from an HTTP status and message
    pub fn api(operation: &OperationDescriptor, status: u16, message: impl Into<String>) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();

        ClientError::Api {
            tag: operation.tag.to_string(),
            operation: operation.operation_id(),
            status,
            reason,
            message: message.into(),
        }
    }

    /// Returns true if the Dashboard rejected the call
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    /// HTTP status of an API error
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if this is a "not found" error (404)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if this is an authentication/authorization error (401/403)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Returns true if this is a rate limiting error (429)
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Returns true if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(code) if (500..600).contains(&code))
    }

    /// Returns true if the request timed out
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Request(e) if e.is_timeout())
    }

    /// Returns true if this error is potentially retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.is_rate_limited() || self.is_server_error() || self.is_timeout()
    }
}

/// Extract a readable message from an error response body.
///
/// The Dashboard reports failures as `{"errors": ["..."]}`; those entries are
/// joined with `"; "`. Other bodies are returned as-is.
pub(crate) fn message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(trimmed)
        && let Some(serde_json::Value::Array(errors)) = map.get("errors")
    {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| match e {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }
    trimmed.to_string()
}
