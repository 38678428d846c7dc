//! The Dashboard client seam
//!
//! [`DashboardClient`] is the single method every client implements: take an
//! [`OperationRequest`] and produce the decoded JSON response. The typed,
//! per-operation front ([`DashboardOperations`](crate::operations::DashboardOperations))
//! is generated on top of it for every implementor, so a mock that records
//! requests and the reqwest-backed [`HttpDashboardClient`] expose the same
//! operation methods.

mod error;
mod http;
mod pagination;

pub use error::ClientError;
pub use http::{
    API_BASE_URL_ENV, API_KEY_ENV, DEFAULT_BASE_URL, DashboardClientBuilder, HttpDashboardClient,
    RetryPolicy,
};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::operations::OperationDescriptor;
use crate::options::{Options, Paging};

/// Result type for client calls
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// A pre-configured Dashboard API client
#[async_trait]
pub trait DashboardClient: Send + Sync {
    /// Execute one operation and return its response unmodified
    async fn call(&self, request: OperationRequest) -> ClientResult<Value>;
}

/// One operation call: required arguments in declared order, the resolved
/// pagination parameters, and the remaining options.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub operation: &'static OperationDescriptor,
    pub arguments: Vec<(&'static str, Value)>,
    pub paging: Option<Paging>,
    pub options: Map<String, Value>,
}

impl OperationRequest {
    /// Bind `arguments` to the operation's required parameters.
    ///
    /// Fails when the argument count does not match the descriptor or when the
    /// pagination overrides in `options` are malformed.
    pub fn new(
        operation: &'static OperationDescriptor,
        arguments: Vec<Value>,
        options: Options,
    ) -> ClientResult<Self> {
        if arguments.len() != operation.required.len() {
            return Err(ClientError::InvalidArgument(format!(
                "{}() takes {} required argument(s) ({}) but {} were given",
                operation.name,
                operation.required.len(),
                operation.required.join(", "),
                arguments.len()
            )));
        }

        let (paging, options) = options.split_paging(operation.paging.map(|p| p.direction))?;

        Ok(Self {
            operation,
            arguments: operation.required.iter().copied().zip(arguments).collect(),
            paging,
            options,
        })
    }

    /// Build a request from command-line strings.
    ///
    /// Arguments that parse as JSON arrays or objects are passed as JSON so
    /// list-valued parameters can be given; everything else stays a string.
    pub fn from_strings(
        operation: &'static OperationDescriptor,
        arguments: &[String],
        options: Options,
    ) -> ClientResult<Self> {
        let values = arguments.iter().map(|arg| parse_argument(arg)).collect();
        Self::new(operation, values, options)
    }

    /// Value bound to a required parameter
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(arg, _)| *arg == name)
            .map(|(_, value)| value)
    }

    /// Required argument values in declared order
    pub fn positional(&self) -> impl Iterator<Item = &Value> {
        self.arguments.iter().map(|(_, value)| value)
    }
}

fn parse_argument(arg: &str) -> Value {
    let trimmed = arg.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        if let Ok(value) = serde_json::from_str(arg) {
            return value;
        }
    }
    Value::String(arg.to_string())
}
