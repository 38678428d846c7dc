//! Dashboard operation registry
//!
//! Every remote operation is declared once in the catalog through the
//! `dashboard_operations!` macro. From that single list the macro generates:
//!
//! - a static [`OperationDescriptor`] per operation in [`descriptors`]
//! - the [`OPERATIONS`] registry used for lookup by name
//! - the [`DashboardOperations`] extension trait, giving every
//!   [`DashboardClient`](crate::client::DashboardClient) one typed method per
//!   operation
//! - the matching forwarding method on
//!   [`ForwardingAdapter`](crate::adapter::ForwardingAdapter)

use std::fmt;

use crate::options::Direction;

/// HTTP method of a Dashboard operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination defaults of a paginated operation.
///
/// The page count always defaults to one page; only the direction differs
/// (`prev` for time-ordered event and change logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PagingDefaults {
    pub direction: Direction,
}

/// Static description of one Dashboard operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationDescriptor {
    /// snake_case method name, shared by the client and the adapter
    pub name: &'static str,
    /// API tag the operation is grouped under (`devices`, `networks`, ...)
    pub tag: &'static str,
    pub method: HttpMethod,
    /// Path template relative to the API base URL, with `{camelCase}` placeholders
    pub path: &'static str,
    /// Required positional parameters in declared order
    pub required: &'static [&'static str],
    /// `Some` for paginated operations
    pub paging: Option<PagingDefaults>,
    summary: &'static str,
}

impl OperationDescriptor {
    /// camelCase operation id as published by the Dashboard API
    pub fn operation_id(&self) -> String {
        camel_case(self.name)
    }

    pub fn is_paginated(&self) -> bool {
        self.paging.is_some()
    }

    /// One-line description of the operation
    pub fn summary(&self) -> &'static str {
        self.summary.trim()
    }

    /// Required parameters that are not bound into the path
    pub fn query_parameters(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required
            .iter()
            .copied()
            .filter(|name| !self.path.contains(&format!("{{{}}}", wire_name(name))))
    }
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.method, self.path, self.name)
    }
}

/// Convert a snake_case identifier to camelCase
pub fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Name of a parameter on the wire (`network_id` -> `networkId`)
pub fn wire_name(parameter: &str) -> String {
    camel_case(parameter)
}

/// Look up an operation by snake_case name, kebab-case name, or camelCase id.
///
/// Ids compare case-insensitively so acronyms published in upper case
/// (`getOrganizationApplianceVpnThirdPartyVPNPeers`) still resolve.
pub fn find(name: &str) -> Option<&'static OperationDescriptor> {
    let name = name.trim();
    let normalized = name.replace('-', "_");
    OPERATIONS
        .iter()
        .copied()
        .find(|op| op.name == normalized || op.operation_id().eq_ignore_ascii_case(name))
}

/// Operations grouped under `tag`, in declaration order
pub fn by_tag(tag: &str) -> impl Iterator<Item = &'static OperationDescriptor> + '_ {
    OPERATIONS
        .iter()
        .copied()
        .filter(move |op| op.tag.eq_ignore_ascii_case(tag))
}

/// Distinct tags in declaration order
pub fn tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for op in OPERATIONS {
        if !tags.contains(&op.tag) {
            tags.push(op.tag);
        }
    }
    tags
}

macro_rules! arg_type {
    () => { &str };
    ($ty:ty) => { $ty };
}

macro_rules! paging_defaults {
    () => {
        None
    };
    ($direction:ident) => {
        Some($crate::operations::PagingDefaults {
            direction: $crate::options::Direction::$direction,
        })
    };
}

macro_rules! http_method {
    (GET) => { $crate::operations::HttpMethod::Get };
    (POST) => { $crate::operations::HttpMethod::Post };
    (PUT) => { $crate::operations::HttpMethod::Put };
    (DELETE) => { $crate::operations::HttpMethod::Delete };
}

/// Declare the Dashboard operations.
///
/// ```text
/// "devices" {
///     /// Return a single device
///     get_device: GET "/devices/{serial}" (serial);
/// }
/// "organizations" {
///     /// List the organizations that the user has privileges on
///     get_organizations: GET "/organizations" () paged(Next);
/// }
/// ```
///
/// Parameters are `&str` unless a type is given (`product_types: Vec<String>`).
macro_rules! dashboard_operations {
    ($(
        $tag:literal {
            $(
                #[doc = $doc:literal]
                $name:ident : $method:ident $path:literal
                    ( $($arg:ident $(: $ty:ty)?),* $(,)? )
                    $(paged($direction:ident))? ;
            )*
        }
    )*) => {
        pastey::paste! {
            /// Static descriptors, one per operation
            pub mod descriptors {
                $($(
                    #[doc = $doc]
                    pub static [<$name:upper>]: $crate::operations::OperationDescriptor =
                        $crate::operations::OperationDescriptor {
                            name: stringify!($name),
                            tag: $tag,
                            method: http_method!($method),
                            path: $path,
                            required: &[$(stringify!($arg)),*],
                            paging: paging_defaults!($($direction)?),
                            summary: $doc,
                        };
                )*)*
            }

            /// Every declared operation, grouped by tag
            pub static OPERATIONS: &[&$crate::operations::OperationDescriptor] = &[
                $($(&descriptors::[<$name:upper>],)*)*
            ];

            /// Typed Dashboard operations, available on every client.
            ///
            /// Each method binds its arguments to the operation descriptor and
            /// hands the resulting request to `DashboardClient::call`.
            pub trait DashboardOperations: $crate::client::DashboardClient {
                $($(
                    #[doc = $doc]
                    fn $name(
                        &self,
                        $($arg: arg_type!($($ty)?),)*
                        options: $crate::options::Options,
                    ) -> futures::future::BoxFuture<'_, $crate::client::ClientResult<serde_json::Value>> {
                        let arguments: Vec<serde_json::Value> = vec![$(serde_json::Value::from($arg)),*];
                        match $crate::client::OperationRequest::new(
                            &descriptors::[<$name:upper>],
                            arguments,
                            options,
                        ) {
                            Ok(request) => self.call(request),
                            Err(err) => Box::pin(futures::future::ready(Err(err))),
                        }
                    }
                )*)*
            }

            impl<T: $crate::client::DashboardClient + ?Sized> DashboardOperations for T {}

            impl<C: $crate::client::DashboardClient + ?Sized> $crate::adapter::ForwardingAdapter<C> {
                $($(
                    #[doc = $doc]
                    pub async fn $name(
                        &self,
                        $($arg: arg_type!($($ty)?),)*
                        options: $crate::options::Options,
                    ) -> serde_json::Value {
                        self.forward(&descriptors::[<$name:upper>], move || {
                            DashboardOperations::$name(&*self.client, $($arg,)* options)
                        })
                        .await
                    }
                )*)*
            }
        }
    };
}

mod catalog;

pub use catalog::*;
