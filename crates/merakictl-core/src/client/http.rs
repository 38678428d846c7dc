//! reqwest-backed Dashboard API client
//!
//! Owns everything the forwarding adapter deliberately leaves out: bearer
//! authentication, URL construction, rate-limit and server-error retries, and
//! Link-header pagination.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, LINK, RETRY_AFTER};
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};
use url::Url;

use super::error::message_from_body;
use super::pagination::{find_link, merge_pages, truncate_events_after};
use super::{ClientError, ClientResult, DashboardClient, OperationRequest};
use crate::operations::{HttpMethod, OperationDescriptor, wire_name};
use crate::options::{Direction, EVENT_LOG_END_TIME_KEY, Paging};

/// Default Dashboard API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Environment variable holding the Dashboard API key
pub const API_KEY_ENV: &str = "MERAKI_DASHBOARD_API_KEY";

/// Environment variable overriding the Dashboard API endpoint
pub const API_BASE_URL_ENV: &str = "MERAKI_DASHBOARD_API_BASE_URL";

const USER_AGENT: &str = concat!("merakictl-core/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// When and how long to wait before re-sending a failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed per request after the first attempt
    pub maximum_retries: u32,
    /// Wait and retry on 429 responses
    pub wait_on_rate_limit: bool,
    /// Wait used for 429 responses without a `Retry-After` header
    pub rate_limit_wait: Duration,
    /// Wait before retrying a 5xx response
    pub server_error_wait: Duration,
    /// Retry other 4xx responses
    pub retry_4xx_error: bool,
    /// Wait before retrying a 4xx response
    pub retry_4xx_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            maximum_retries: 2,
            wait_on_rate_limit: true,
            rate_limit_wait: Duration::from_secs(60),
            server_error_wait: Duration::from_secs(1),
            retry_4xx_error: false,
            retry_4xx_wait: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Never retry
    pub fn none() -> Self {
        Self {
            maximum_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retrying a response with `status`, or `None` to give up
    pub fn delay_for(&self, status: StatusCode, retry_after: Option<Duration>) -> Option<Duration> {
        if status == StatusCode::TOO_MANY_REQUESTS {
            self.wait_on_rate_limit
                .then(|| retry_after.unwrap_or(self.rate_limit_wait))
        } else if status.is_server_error() {
            Some(self.server_error_wait)
        } else if status.is_client_error() {
            self.retry_4xx_error.then_some(self.retry_4xx_wait)
        } else {
            None
        }
    }
}

/// Builder for [`HttpDashboardClient`]
#[derive(Clone)]
pub struct DashboardClientBuilder {
    api_key: Option<String>,
    base_url: String,
    caller: Option<String>,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            caller: None,
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl DashboardClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Application identifier appended to the User-Agent header
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// Timeout for each individual HTTP request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> ClientResult<HttpDashboardClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ClientError::InvalidArgument(format!(
                    "an API key is required (set {} or configure a profile)",
                    API_KEY_ENV
                ))
            })?;

        let user_agent = match &self.caller {
            Some(caller) => format!("{} {}", USER_AGENT, caller),
            None => USER_AGENT.to_string(),
        };

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(HttpDashboardClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            retry: self.retry,
        })
    }
}

/// Dashboard API client over HTTPS
#[derive(Clone)]
pub struct HttpDashboardClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl fmt::Debug for HttpDashboardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDashboardClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish()
    }
}

/// One decoded response plus its pagination header
struct Page {
    url: Url,
    value: Value,
    link: Option<String>,
}

impl HttpDashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    /// Build a client from `MERAKI_DASHBOARD_API_KEY` and, when set,
    /// `MERAKI_DASHBOARD_API_BASE_URL`
    pub fn from_env() -> ClientResult<Self> {
        let mut builder = Self::builder();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            builder = builder.api_key(key);
        }
        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Resolve the request URL and body.
    ///
    /// Required arguments fill their `{placeholder}` in the path; arguments
    /// without a placeholder join the options. Parameters go to the query
    /// string for GET/DELETE and to the JSON body otherwise.
    fn prepare(&self, request: &OperationRequest) -> ClientResult<(Url, Option<Value>)> {
        let operation = request.operation;
        let mut path = operation.path.to_string();
        let mut params = Map::new();

        for (name, value) in &request.arguments {
            let wire = wire_name(name);
            let placeholder = format!("{{{}}}", wire);
            if path.contains(&placeholder) {
                let segment = scalar_to_string(value).ok_or_else(|| {
                    ClientError::InvalidArgument(format!(
                        "{}: path parameter '{}' must be a string or number",
                        operation.name, name
                    ))
                })?;
                path = path.replace(&placeholder, &urlencoding::encode(&segment));
            } else {
                params.insert(wire, value.clone());
            }
        }
        params.extend(request.options.clone());

        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            ClientError::InvalidArgument(format!("{}: invalid URL: {}", operation.name, e))
        })?;

        match operation.method {
            HttpMethod::Get | HttpMethod::Delete => {
                append_query(&mut url, &params);
                Ok((url, None))
            }
            HttpMethod::Post | HttpMethod::Put => {
                let body = (!params.is_empty()).then_some(Value::Object(params));
                Ok((url, body))
            }
        }
    }

    async fn send(
        &self,
        operation: &OperationDescriptor,
        method: HttpMethod,
        url: Url,
        body: Option<&Value>,
    ) -> ClientResult<Page> {
        let mut retries = 0;
        loop {
            debug!(operation = operation.name, %method, %url, "sending request");

            let mut builder = self
                .http
                .request(method.to_reqwest(), url.clone())
                .bearer_auth(&self.api_key)
                .header(ACCEPT, "application/json");
            if let Some(body) = body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            trace!(operation = operation.name, status = status.as_u16(), "response received");

            if status.is_success() {
                let final_url = response.url().clone();
                let link = response
                    .headers()
                    .get(LINK)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                let text = response.text().await?;
                let value = if text.trim().is_empty() {
                    Value::Null
                } else {
                    serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))?
                };
                return Ok(Page {
                    url: final_url,
                    value,
                    link,
                });
            }

            let retry_after = parse_retry_after(response.headers());
            if retries < self.retry.maximum_retries
                && let Some(delay) = self.retry.delay_for(status, retry_after)
            {
                retries += 1;
                warn!(
                    operation = operation.name,
                    status = status.as_u16(),
                    attempt = retries,
                    delay_ms = delay.as_millis() as u64,
                    "retrying request"
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::api(
                operation,
                status.as_u16(),
                message_from_body(&text),
            ));
        }
    }

    /// Follow Link headers from `first` until the page budget runs out.
    ///
    /// Links are only followed to the origin of the configured base URL or of
    /// the page that carried them, and never back to the same page.
    async fn collect_pages(
        &self,
        operation: &OperationDescriptor,
        paging: Paging,
        event_log_end_time: Option<&str>,
        first: Page,
    ) -> ClientResult<Value> {
        let mut merged = first.value;
        let mut current_url = first.url;
        let mut link = first.link;
        let mut fetched = 1;

        while paging.total_pages.allows_more(fetched) {
            if let Some(end_time) = event_log_end_time
                && paging.direction == Direction::Next
                && truncate_events_after(&mut merged, end_time)
            {
                debug!(operation = operation.name, end_time, "event log end time reached");
                break;
            }

            let Some(target) = link
                .as_deref()
                .and_then(|header| find_link(header, paging.direction))
            else {
                break;
            };
            let next_url = current_url.join(&target).map_err(|e| {
                ClientError::Decode(format!("invalid pagination link '{}': {}", target, e))
            })?;

            if next_url == current_url {
                debug!(operation = operation.name, %next_url, "pagination link repeats the current page");
                break;
            }
            if !self.may_follow(&next_url, &current_url) {
                warn!(
                    operation = operation.name,
                    %next_url,
                    "not following pagination link to another origin"
                );
                break;
            }

            let page = self.send(operation, HttpMethod::Get, next_url, None).await?;
            merged = merge_pages(merged, page.value, paging.direction);
            current_url = page.url;
            link = page.link;
            fetched += 1;
        }

        if let Some(end_time) = event_log_end_time
            && paging.direction == Direction::Next
        {
            truncate_events_after(&mut merged, end_time);
        }

        debug!(operation = operation.name, pages = fetched, "pagination complete");
        Ok(merged)
    }

    /// Whether the API key may be sent to `target`
    fn may_follow(&self, target: &Url, current: &Url) -> bool {
        let origin = target.origin();
        origin == current.origin()
            || Url::parse(&self.base_url)
                .map(|base| base.origin() == origin)
                .unwrap_or(false)
    }
}

#[async_trait]
impl DashboardClient for HttpDashboardClient {
    async fn call(&self, mut request: OperationRequest) -> ClientResult<Value> {
        let operation = request.operation;
        let event_log_end_time = match request.paging {
            Some(_) => request
                .options
                .remove(EVENT_LOG_END_TIME_KEY)
                .and_then(|value| value.as_str().map(str::to_string)),
            None => None,
        };
        let (url, body) = self.prepare(&request)?;
        let first = self.send(operation, operation.method, url, body.as_ref()).await?;

        match request.paging {
            Some(paging) => {
                self.collect_pages(operation, paging, event_log_end_time.as_deref(), first)
                    .await
            }
            None => Ok(first.value),
        }
    }
}

/// Append parameters to the query string; arrays use the `key[]=value` form
fn append_query(url: &mut Url, params: &Map<String, Value>) {
    if params.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let array_key = format!("{}[]", key);
                for item in items {
                    let rendered = scalar_to_string(item).unwrap_or_else(|| item.to_string());
                    pairs.append_pair(&array_key, &rendered);
                }
            }
            other => {
                let rendered = scalar_to_string(other).unwrap_or_else(|| other.to_string());
                pairs.append_pair(key, &rendered);
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::descriptors;
    use crate::options::Options;
    use serde_json::json;

    fn client() -> HttpDashboardClient {
        HttpDashboardClient::builder()
            .api_key("test-key")
            .base_url("https://api.example.test/api/v1/")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        let err = HttpDashboardClient::builder().build().unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));

        let err = HttpDashboardClient::builder().api_key("  ").build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_prepare_fills_path_and_query() {
        let request = OperationRequest::new(
            &descriptors::GET_NETWORK_CLIENT_TRAFFIC_HISTORY,
            vec![json!("L_1"), json!("k 2")],
            Options::new().with("perPage", 10).with("tags", json!(["a", "b"])),
        )
        .unwrap();

        let (url, body) = client().prepare(&request).unwrap();
        assert_eq!(url.path(), "/api/v1/networks/L_1/clients/k%202/trafficHistory");
        assert_eq!(url.query(), Some("perPage=10&tags%5B%5D=a&tags%5B%5D=b"));
        assert!(body.is_none());
    }

    #[test]
    fn test_prepare_moves_extra_required_args_to_query() {
        let request = OperationRequest::new(
            &descriptors::GET_DEVICE_LOSS_AND_LATENCY_HISTORY,
            vec![json!("Q2XX-AAAA-BBBB"), json!("8.8.8.8")],
            Options::new(),
        )
        .unwrap();

        let (url, _) = client().prepare(&request).unwrap();
        assert_eq!(url.path(), "/api/v1/devices/Q2XX-AAAA-BBBB/lossAndLatencyHistory");
        assert_eq!(url.query(), Some("ip=8.8.8.8"));
    }

    #[test]
    fn test_prepare_builds_json_body_for_post() {
        let request = OperationRequest::new(
            &descriptors::CREATE_ORGANIZATION_NETWORK,
            vec![json!("549236"), json!("Branch"), json!(["appliance"])],
            Options::new().with("timeZone", "Europe/Berlin"),
        )
        .unwrap();

        let (url, body) = client().prepare(&request).unwrap();
        assert_eq!(url.path(), "/api/v1/organizations/549236/networks");
        assert_eq!(
            body,
            Some(json!({
                "name": "Branch",
                "productTypes": ["appliance"],
                "timeZone": "Europe/Berlin"
            }))
        );
    }

    #[test]
    fn test_prepare_rejects_object_path_parameter() {
        let request = OperationRequest::new(
            &descriptors::GET_DEVICE,
            vec![json!({"serial": "x"})],
            Options::new(),
        )
        .unwrap();

        assert!(matches!(
            client().prepare(&request),
            Err(ClientError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_retry_policy_delays() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.delay_for(StatusCode::TOO_MANY_REQUESTS, Some(Duration::from_secs(2))),
            Some(Duration::from_secs(2))
        );
        assert_eq!(
            policy.delay_for(StatusCode::TOO_MANY_REQUESTS, None),
            Some(Duration::from_secs(60))
        );
        assert_eq!(
            policy.delay_for(StatusCode::BAD_GATEWAY, None),
            Some(Duration::from_secs(1))
        );
        assert_eq!(policy.delay_for(StatusCode::NOT_FOUND, None), None);

        let policy = RetryPolicy {
            wait_on_rate_limit: false,
            retry_4xx_error: true,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.delay_for(StatusCode::TOO_MANY_REQUESTS, None), None);
        assert_eq!(
            policy.delay_for(StatusCode::NOT_FOUND, None),
            Some(Duration::from_secs(60))
        );
    }
}
