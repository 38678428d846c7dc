//! `merakictl call`: forward one operation through the adapter

use std::fs;

use merakictl_core::adapter::error_message;
use merakictl_core::operations::{self, OperationDescriptor};
use merakictl_core::{OperationRequest, Options};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cli::{CallArgs, OutputFormat};
use crate::connection::ConnectionManager;
use crate::error::{MerakiCtlError, Result as CliResult};
use crate::output;

pub async fn handle_call(
    args: &CallArgs,
    conn_mgr: &ConnectionManager,
    profile: Option<&str>,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let descriptor =
        operations::find(&args.operation).ok_or_else(|| MerakiCtlError::UnknownOperation {
            name: args.operation.clone(),
        })?;
    debug!("Resolved '{}' to {}", args.operation, descriptor);

    let options = build_options(args, descriptor)?;
    let request = OperationRequest::from_strings(descriptor, &args.arguments, options)?;

    let adapter = conn_mgr.create_adapter(profile)?;
    info!("Calling {}", descriptor.operation_id());
    let value = adapter.invoke(request).await;

    let format = output_format.resolve(output::OutputFormat::Json);
    if let Some(message) = error_message(&value) {
        // Queries are written against the success shape; print the mapping as is
        output::print_output(&value, format, None)?;
        return Err(MerakiCtlError::OperationFailed {
            operation: descriptor.operation_id(),
            message: message.to_string(),
        });
    }

    output::print_output(value, format, query)?;
    Ok(())
}

/// Collect `--data`, `--param` and the paging flags into an options bag.
///
/// `--data` entries come first so individual `--param` flags override them.
pub fn build_options(args: &CallArgs, descriptor: &OperationDescriptor) -> CliResult<Options> {
    let mut options = Options::new();

    if let Some(data) = &args.data {
        match read_json_input(data)? {
            Value::Object(map) => {
                for (key, value) in map {
                    options.insert(key, value);
                }
            }
            other => {
                return Err(MerakiCtlError::InvalidInput {
                    message: format!("--data must be a JSON object, got {}", json_kind(&other)),
                });
            }
        }
    }

    for (key, value) in &args.params {
        options.insert(key.clone(), value.clone());
    }

    if args.total_pages.is_some() || args.direction.is_some() {
        if !descriptor.is_paginated() {
            warn!(
                "{} is not paginated; ignoring --total-pages/--direction",
                descriptor.operation_id()
            );
            return Ok(options);
        }
        if let Some(total_pages) = args.total_pages {
            options = options.total_pages(total_pages);
        }
        if let Some(direction) = args.direction {
            options = options.direction(direction);
        }
    }

    Ok(options)
}

/// Parse inline JSON, or JSON read from `@path`
fn read_json_input(input: &str) -> CliResult<Value> {
    let text = if let Some(path) = input.strip_prefix('@') {
        fs::read_to_string(path).map_err(|e| MerakiCtlError::FileError {
            path: path.to_string(),
            message: e.to_string(),
        })?
    } else {
        input.to_string()
    };

    serde_json::from_str(&text).map_err(|e| MerakiCtlError::InvalidInput {
        message: format!("Invalid JSON in --data: {}", e),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merakictl_core::operations::descriptors;
    use merakictl_core::{Direction, TotalPages};
    use serde_json::json;
    use std::io::Write;

    fn call_args(data: Option<&str>, params: Vec<(&str, Value)>) -> CallArgs {
        CallArgs {
            operation: "get_network_events".to_string(),
            arguments: vec!["L_1234".to_string()],
            params: params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            data: data.map(str::to_string),
            total_pages: None,
            direction: None,
        }
    }

    #[test]
    fn test_params_override_data() {
        let args = call_args(
            Some(r#"{"perPage": 10, "productType": "switch"}"#),
            vec![("perPage", json!(3))],
        );

        let options = build_options(&args, &descriptors::GET_NETWORK_EVENTS).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("perPage"), Some(&json!(3)));
        assert_eq!(options.get("productType"), Some(&json!("switch")));
    }

    #[test]
    fn test_paging_flags_become_options() {
        let mut args = call_args(None, vec![]);
        args.total_pages = Some(TotalPages::All);
        args.direction = Some(Direction::Next);

        let options = build_options(&args, &descriptors::GET_NETWORK_EVENTS).unwrap();
        assert_eq!(options.get("total_pages"), Some(&json!(-1)));
        assert_eq!(options.get("direction"), Some(&json!("next")));
    }

    #[test]
    fn test_paging_flags_ignored_for_single_page_operations() {
        let mut args = call_args(None, vec![]);
        args.total_pages = Some(TotalPages::Count(3));

        let options = build_options(&args, &descriptors::GET_DEVICE).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_data_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "lobby-ap", "tags": ["lobby"]}}"#).unwrap();
        let data = format!("@{}", file.path().display());

        let options =
            build_options(&call_args(Some(&data), vec![]), &descriptors::UPDATE_DEVICE).unwrap();
        assert_eq!(options.get("tags"), Some(&json!(["lobby"])));
    }

    #[test]
    fn test_data_must_be_an_object() {
        let err = build_options(&call_args(Some("[1, 2]"), vec![]), &descriptors::UPDATE_DEVICE)
            .unwrap_err();
        assert!(err.to_string().contains("got an array"));
    }

    #[test]
    fn test_missing_data_file() {
        let err = build_options(
            &call_args(Some("@/nonexistent/merakictl/device.json"), vec![]),
            &descriptors::UPDATE_DEVICE,
        )
        .unwrap_err();
        assert!(matches!(err, MerakiCtlError::FileError { .. }));
    }
}
