//! Forwarding adapter
//!
//! [`ForwardingAdapter`] wraps a shared [`DashboardClient`] and exposes one
//! method per Dashboard operation, named like the client's method. Every call
//! is forwarded unchanged; the client's value is returned untouched on success
//! and every failure, including a panic inside the client, is logged once and
//! turned into an `{"error": "<message>"}` mapping. Adapter methods never
//! return `Err` and never unwind into the caller.
//!
//! ```no_run
//! use std::sync::Arc;
//! use merakictl_core::{ForwardingAdapter, HttpDashboardClient, Options};
//!
//! # async fn example() -> Result<(), merakictl_core::ClientError> {
//! let client = Arc::new(HttpDashboardClient::from_env()?);
//! let adapter = ForwardingAdapter::new(client);
//!
//! let device = adapter.get_device("Q2XX-XXXX-XXXX", Options::new()).await;
//! if let Some(message) = merakictl_core::adapter::error_message(&device) {
//!     eprintln!("lookup failed: {}", message);
//! }
//! # Ok(())
//! # }
//! ```

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::{Value, json};
use tracing::error;

use crate::client::{ClientError, ClientResult, DashboardClient, OperationRequest};
use crate::operations::OperationDescriptor;

/// Key of the single entry in an error mapping
pub const ERROR_KEY: &str = "error";

/// Which side a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The Dashboard API rejected the call
    Api,
    /// Anything else: transport, decoding, bad arguments, a panicking client
    Unknown,
}

impl FailureKind {
    /// Log line prefix for this tier
    pub fn log_prefix(&self) -> &'static str {
        match self {
            FailureKind::Api => "API Error in",
            FailureKind::Unknown => "Unknown error in",
        }
    }
}

/// A contained failure of one operation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "operation panicked".to_string()
        };
        Self {
            kind: FailureKind::Unknown,
            message,
        }
    }

    /// `{"error": "<message>"}`
    pub fn into_error_mapping(self) -> Value {
        json!({ ERROR_KEY: self.message })
    }

    fn log(&self, operation: &str) {
        error!("{} {}: {}", self.kind.log_prefix(), operation, self.message);
    }
}

impl From<ClientError> for Failure {
    fn from(err: ClientError) -> Self {
        let kind = if err.is_api_error() {
            FailureKind::Api
        } else {
            FailureKind::Unknown
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}

/// Returns true if `value` has the shape the adapter produces on failure
pub fn is_error_mapping(value: &Value) -> bool {
    error_message(value).is_some()
}

/// Message of an error mapping, or `None` for any other value
pub fn error_message(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) if map.len() == 1 => map.get(ERROR_KEY)?.as_str(),
        _ => None,
    }
}

/// Pass-through adapter over a shared Dashboard client
pub struct ForwardingAdapter<C: DashboardClient + ?Sized> {
    pub(crate) client: Arc<C>,
}

impl<C: DashboardClient + ?Sized> Clone for ForwardingAdapter<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: DashboardClient + ?Sized> fmt::Debug for ForwardingAdapter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardingAdapter").finish_non_exhaustive()
    }
}

impl<C: DashboardClient + ?Sized> ForwardingAdapter<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// The wrapped client
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Forward a prepared request, for dispatch by operation name
    pub async fn invoke(&self, request: OperationRequest) -> Value {
        let operation = request.operation;
        self.forward(operation, || self.client.call(request)).await
    }

    /// Like [`invoke`](Self::invoke) but keeps the failure tier.
    ///
    /// The failure is still logged exactly once.
    pub async fn try_invoke(&self, request: OperationRequest) -> Result<Value, Failure> {
        let operation = request.operation;
        self.run(operation, || self.client.call(request)).await
    }

    pub(crate) async fn forward<F, Fut>(&self, operation: &OperationDescriptor, call: F) -> Value
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<Value>>,
    {
        match self.run(operation, call).await {
            Ok(value) => value,
            Err(failure) => failure.into_error_mapping(),
        }
    }

    async fn run<F, Fut>(&self, operation: &OperationDescriptor, call: F) -> Result<Value, Failure>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<Value>>,
    {
        // A client may panic while building its future or while polling it
        let outcome = match std::panic::catch_unwind(AssertUnwindSafe(call)) {
            Ok(future) => match AssertUnwindSafe(future).catch_unwind().await {
                Ok(result) => result.map_err(Failure::from),
                Err(payload) => Err(Failure::from_panic(payload)),
            },
            Err(payload) => Err(Failure::from_panic(payload)),
        };

        outcome.inspect_err(|failure| failure.log(operation.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::descriptors;
    use serde_json::json;

    #[test]
    fn test_failure_kind_from_client_error() {
        let failure = Failure::from(ClientError::api(&descriptors::GET_DEVICE, 404, "Not found"));
        assert_eq!(failure.kind, FailureKind::Api);
        assert_eq!(failure.message, "devices, getDevice - 404 Not Found, Not found");

        let failure = Failure::from(ClientError::InvalidArgument("bad serial".to_string()));
        assert_eq!(failure.kind, FailureKind::Unknown);
        assert_eq!(failure.message, "Invalid argument: bad serial");
    }

    #[test]
    fn test_failure_from_panic_payloads() {
        let failure = Failure::from_panic(Box::new("static str"));
        assert_eq!(failure.message, "static str");

        let failure = Failure::from_panic(Box::new(String::from("owned")));
        assert_eq!(failure.message, "owned");

        let failure = Failure::from_panic(Box::new(42_u8));
        assert_eq!(failure.message, "operation panicked");
        assert_eq!(failure.kind, FailureKind::Unknown);
    }

    #[test]
    fn test_error_mapping_shape() {
        let value = Failure {
            kind: FailureKind::Api,
            message: "boom".to_string(),
        }
        .into_error_mapping();

        assert_eq!(value, json!({"error": "boom"}));
        assert!(is_error_mapping(&value));
        assert_eq!(error_message(&value), Some("boom"));
    }

    #[test]
    fn test_regular_values_are_not_error_mappings() {
        assert!(!is_error_mapping(&json!({"error": "x", "serial": "Q2"})));
        assert!(!is_error_mapping(&json!({"error": 5})));
        assert!(!is_error_mapping(&json!([{"error": "x"}])));
        assert!(!is_error_mapping(&Value::Null));
    }

    #[test]
    fn test_log_prefixes() {
        assert_eq!(FailureKind::Api.log_prefix(), "API Error in");
        assert_eq!(FailureKind::Unknown.log_prefix(), "Unknown error in");
    }
}
