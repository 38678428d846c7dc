//! Forwarding adapter behavior against a recording client

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use merakictl_core::adapter::{self, FailureKind};
use merakictl_core::client::{ClientError, ClientResult, DashboardClient, OperationRequest};
use merakictl_core::operations::{self, descriptors};
use merakictl_core::options::{Direction, Options, Paging, TotalPages};
use merakictl_core::ForwardingAdapter;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tracing_subscriber::fmt::MakeWriter;

// ============================================================================
// Test client
// ============================================================================

type Responder = Box<dyn Fn(&OperationRequest) -> ClientResult<Value> + Send + Sync>;

/// Records every request and answers with a fixed responder
struct RecordingClient {
    calls: Mutex<Vec<OperationRequest>>,
    respond: Responder,
}

impl RecordingClient {
    fn new(
        respond: impl Fn(&OperationRequest) -> ClientResult<Value> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    fn returning(value: Value) -> Arc<Self> {
        Self::new(move |_| Ok(value.clone()))
    }

    fn calls(&self) -> Vec<OperationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DashboardClient for RecordingClient {
    async fn call(&self, request: OperationRequest) -> ClientResult<Value> {
        self.calls.lock().unwrap().push(request.clone());
        (self.respond)(&request)
    }
}

// ============================================================================
// Log capture
// ============================================================================

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn error_lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route this thread's events into a buffer until the guard drops
fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

// ============================================================================
// Pass-through
// ============================================================================

#[tokio::test]
async fn success_returns_client_value_unchanged() {
    let (logs, _guard) = capture_logs();
    let device = json!({
        "serial": "Q2XX-XXXX-XXXX",
        "model": "MR46",
        "lanIp": null,
        "tags": ["lobby", "floor-1"],
        "details": [{"name": "uptime", "value": 86400}]
    });
    let client = RecordingClient::returning(device.clone());
    let adapter = ForwardingAdapter::new(client.clone());

    let result = adapter.get_device("Q2XX-XXXX-XXXX", Options::new()).await;

    assert_eq!(result, device);
    assert_eq!(logs.contents(), "");
}

#[tokio::test]
async fn non_object_values_pass_through() {
    let client = RecordingClient::new(|request| match request.operation.name {
        "get_organizations" => Ok(json!([{"id": "1"}, {"id": "2"}])),
        "reboot_device" => Ok(json!({"success": true})),
        _ => Ok(Value::Null),
    });
    let adapter = ForwardingAdapter::new(client);

    assert_eq!(
        adapter.get_organizations(Options::new()).await,
        json!([{"id": "1"}, {"id": "2"}])
    );
    assert_eq!(
        adapter.reboot_device("Q2XX-XXXX-XXXX", Options::new()).await,
        json!({"success": true})
    );
    assert_eq!(
        adapter.delete_network("N_1", Options::new()).await,
        Value::Null
    );
}

#[tokio::test]
async fn value_with_error_key_is_not_rewritten() {
    let upstream = json!({"error": "reported by the device", "serial": "Q2"});
    let adapter = ForwardingAdapter::new(RecordingClient::returning(upstream.clone()));

    let result = adapter.get_device("Q2", Options::new()).await;
    assert_eq!(result, upstream);
    assert!(!adapter::is_error_mapping(&result));
}

// ============================================================================
// Failure tiers
// ============================================================================

#[tokio::test]
async fn api_error_becomes_error_mapping_and_one_log_line() {
    let (logs, _guard) = capture_logs();
    let client = RecordingClient::new(|request| {
        Err(ClientError::api(request.operation, 404, "Device not found"))
    });
    let adapter = ForwardingAdapter::new(client);

    let result = adapter.get_device("Q2XX-XXXX-XXXX", Options::new()).await;

    let message = "devices, getDevice - 404 Not Found, Device not found";
    assert_eq!(result, json!({ "error": message }));

    let lines = logs.error_lines();
    assert_eq!(lines.len(), 1, "{}", logs.contents());
    assert!(lines[0].contains(&format!("API Error in get_device: {}", message)));
}

#[tokio::test]
async fn other_error_uses_unknown_prefix() {
    let (logs, _guard) = capture_logs();
    let client = RecordingClient::new(|_| Err(ClientError::Other("connection reset".to_string())));
    let adapter = ForwardingAdapter::new(client);

    let result = adapter.get_network("N_24329156", Options::new()).await;

    assert_eq!(result, json!({"error": "connection reset"}));
    let lines = logs.error_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Unknown error in get_network: connection reset"));
    assert!(!lines[0].contains("API Error"));
}

#[tokio::test]
async fn panicking_client_is_contained() {
    let (logs, _guard) = capture_logs();
    let client = RecordingClient::new(|_| panic!("client exploded"));
    let adapter = ForwardingAdapter::new(client.clone());

    let result = adapter.get_organization("549236", Options::new()).await;

    assert_eq!(result, json!({"error": "client exploded"}));
    let lines = logs.error_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Unknown error in get_organization: client exploded"));

    // The adapter is still usable afterwards
    assert_eq!(client.calls().len(), 1);
    let again = adapter.get_organization("549236", Options::new()).await;
    assert!(adapter::is_error_mapping(&again));
}

#[tokio::test]
async fn invalid_paging_option_fails_before_reaching_client() {
    let (logs, _guard) = capture_logs();
    let client = RecordingClient::returning(json!([]));
    let adapter = ForwardingAdapter::new(client.clone());

    let result = adapter
        .get_organizations(Options::new().with("total_pages", "many"))
        .await;

    assert_eq!(
        adapter::error_message(&result),
        Some("Invalid argument: invalid value for total_pages: \"many\"")
    );
    assert!(client.calls().is_empty());
    let lines = logs.error_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Unknown error in get_organizations"));
}

#[tokio::test]
async fn try_invoke_keeps_the_failure_tier() {
    let client = RecordingClient::new(|request| {
        if request.operation.name == "get_network" {
            Err(ClientError::api(request.operation, 400, "Bad network id"))
        } else {
            Err(ClientError::Decode("expected value at line 1".to_string()))
        }
    });
    let adapter = ForwardingAdapter::new(client);

    let request =
        OperationRequest::new(&descriptors::GET_NETWORK, vec![json!("N_1")], Options::new())
            .unwrap();
    let failure = adapter.try_invoke(request).await.unwrap_err();
    assert_eq!(failure.kind, FailureKind::Api);
    assert_eq!(failure.message, "networks, getNetwork - 400 Bad Request, Bad network id");

    let request =
        OperationRequest::new(&descriptors::GET_DEVICE, vec![json!("Q2")], Options::new()).unwrap();
    let failure = adapter.try_invoke(request).await.unwrap_err();
    assert_eq!(failure.kind, FailureKind::Unknown);
}

// ============================================================================
// Argument forwarding
// ============================================================================

#[tokio::test]
async fn single_positional_is_forwarded_verbatim() {
    let client = RecordingClient::returning(json!({}));
    let adapter = ForwardingAdapter::new(client.clone());

    adapter.get_device("Q2XX-XXXX-XXXX", Options::new()).await;

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, &descriptors::GET_DEVICE);
    assert_eq!(calls[0].arguments, vec![("serial", json!("Q2XX-XXXX-XXXX"))]);
    assert!(calls[0].options.is_empty());
    assert!(calls[0].paging.is_none());
}

#[tokio::test]
async fn positionals_and_options_keep_their_order() {
    let client = RecordingClient::returning(json!({}));
    let adapter = ForwardingAdapter::new(client.clone());

    let options = Options::new()
        .with("timespan", 86400)
        .with("perPage", 10)
        .with("includeConnectivityHistory", true);
    adapter
        .get_network_client("N_24329156", "k74272e", options)
        .await;

    let call = &client.calls()[0];
    assert_eq!(
        call.arguments,
        vec![
            ("network_id", json!("N_24329156")),
            ("client_id", json!("k74272e"))
        ]
    );
    let keys: Vec<_> = call.options.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["timespan", "perPage", "includeConnectivityHistory"]);
    assert_eq!(call.options["perPage"], json!(10));
}

#[tokio::test]
async fn typed_list_arguments_are_forwarded_as_arrays() {
    let client = RecordingClient::returning(json!({"id": "L_1"}));
    let adapter = ForwardingAdapter::new(client.clone());

    adapter
        .create_organization_network(
            "549236",
            "Branch",
            vec!["appliance".to_string(), "switch".to_string()],
            Options::new().with("timeZone", "America/Los_Angeles"),
        )
        .await;

    let call = &client.calls()[0];
    let positional: Vec<_> = call.positional().cloned().collect();
    assert_eq!(
        positional,
        vec![json!("549236"), json!("Branch"), json!(["appliance", "switch"])]
    );
    assert_eq!(call.options["timeZone"], json!("America/Los_Angeles"));
}

#[tokio::test]
async fn paging_defaults_are_always_forwarded() {
    let client = RecordingClient::returning(json!([]));
    let adapter = ForwardingAdapter::new(client.clone());

    adapter.get_organizations(Options::new()).await;
    adapter.get_network_events("N_1", Options::new()).await;
    adapter
        .get_organization_configuration_changes("549236", Options::new())
        .await;

    let paging: Vec<_> = client.calls().iter().map(|c| c.paging).collect();
    assert_eq!(
        paging,
        vec![
            Some(Paging {
                total_pages: TotalPages::Count(1),
                direction: Direction::Next
            }),
            Some(Paging {
                total_pages: TotalPages::Count(1),
                direction: Direction::Prev
            }),
            Some(Paging {
                total_pages: TotalPages::Count(1),
                direction: Direction::Prev
            }),
        ]
    );
}

#[tokio::test]
async fn paging_overrides_come_from_options() {
    let client = RecordingClient::returning(json!([]));
    let adapter = ForwardingAdapter::new(client.clone());

    adapter
        .get_organization_networks(
            "549236",
            Options::new()
                .with("perPage", 1000)
                .total_pages(TotalPages::All)
                .direction(Direction::Prev),
        )
        .await;

    let call = &client.calls()[0];
    assert_eq!(
        call.paging,
        Some(Paging {
            total_pages: TotalPages::All,
            direction: Direction::Prev
        })
    );
    assert_eq!(call.options.len(), 1);
    assert_eq!(call.options["perPage"], json!(1000));
}

// ============================================================================
// Dynamic dispatch
// ============================================================================

#[tokio::test]
async fn invoke_by_operation_name() {
    let client = RecordingClient::new(|request| {
        Ok(json!({ "serial": request.argument("serial").cloned() }))
    });
    let adapter = ForwardingAdapter::new(client.clone());

    let operation = operations::find("getDevice").unwrap();
    let request =
        OperationRequest::from_strings(operation, &["Q2AB-CDEF-GHIJ".to_string()], Options::new())
            .unwrap();

    let result = adapter.invoke(request).await;
    assert_eq!(result, json!({"serial": "Q2AB-CDEF-GHIJ"}));
}

#[tokio::test]
async fn adapter_works_over_trait_objects() {
    let client: Arc<dyn DashboardClient> = RecordingClient::returning(json!({"ok": true}));
    let adapter: ForwardingAdapter<dyn DashboardClient> = ForwardingAdapter::new(client);

    assert_eq!(
        adapter.get_network_devices("N_1", Options::new()).await,
        json!({"ok": true})
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_are_independent() {
    let client = RecordingClient::new(|request| match request.argument("serial") {
        Some(Value::String(serial)) if serial.starts_with("BAD") => {
            Err(ClientError::api(request.operation, 404, "Not found"))
        }
        Some(serial) => Ok(json!({ "serial": serial })),
        None => Ok(Value::Null),
    });
    let adapter = ForwardingAdapter::new(client.clone());

    let serials: Vec<String> = (0..32)
        .map(|i| {
            if i % 4 == 0 {
                format!("BAD-{:04}", i)
            } else {
                format!("Q2XX-{:04}", i)
            }
        })
        .collect();

    let handles: Vec<_> = serials
        .iter()
        .cloned()
        .map(|serial| {
            let adapter = adapter.clone();
            tokio::spawn(async move {
                let value = adapter.get_device(&serial, Options::new()).await;
                (serial, value)
            })
        })
        .collect();

    for handle in handles {
        let (serial, value) = handle.await.unwrap();
        if serial.starts_with("BAD") {
            assert!(adapter::is_error_mapping(&value), "{}: {}", serial, value);
        } else {
            assert_eq!(value, json!({ "serial": serial }));
        }
    }
    assert_eq!(client.calls().len(), serials.len());
}

#[tokio::test]
async fn joined_calls_on_one_task() {
    let client = RecordingClient::new(|request| Ok(json!(request.operation.name)));
    let adapter = ForwardingAdapter::new(client);

    let (a, b, c) = tokio::join!(
        adapter.get_network("N_1", Options::new()),
        adapter.get_organization("1", Options::new()),
        adapter.get_device_lldp_cdp("Q2", Options::new()),
    );

    assert_eq!(a, json!("get_network"));
    assert_eq!(b, json!("get_organization"));
    assert_eq!(c, json!("get_device_lldp_cdp"));
}
