//! # merakictl-core
//!
//! A pass-through adapter over the Meraki Dashboard API.
//!
//! [`ForwardingAdapter`] exposes one method per Dashboard operation. Each
//! method forwards its arguments to the wrapped [`DashboardClient`] and
//! returns the client's JSON unchanged, or `{"error": "<message>"}` when the
//! call fails. Failures are logged through `tracing` at error level and are
//! never returned as `Err`.
//!
//! ## Crate Structure
//!
//! ```text
//! merakictl-core/
//! ├── src/
//! │   ├── adapter.rs      # ForwardingAdapter, failure tiers, error mapping
//! │   ├── operations/     # operation registry and the generated method surface
//! │   ├── client/         # DashboardClient seam and the reqwest client
//! │   ├── options.rs      # options bag and pagination parameters
//! │   ├── config/         # profiles, credentials, resilience settings
//! │   └── error.rs        # CoreError
//! ```

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod operations;
pub mod options;

pub use adapter::{Failure, FailureKind, ForwardingAdapter};
pub use client::{
    ClientError, ClientResult, DashboardClient, HttpDashboardClient, OperationRequest, RetryPolicy,
};
pub use config::{Config, ConfigError, Profile};
pub use error::{CoreError, Result};
pub use operations::{DashboardOperations, OperationDescriptor};
pub use options::{Direction, Options, Paging, TotalPages};
