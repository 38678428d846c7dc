//! `merakictl operations`: browse the operation catalog

use merakictl_core::operations::{self, OPERATIONS, OperationDescriptor};
use serde_json::{Value, json};
use tracing::debug;

use crate::cli::{OperationsCommands, OutputFormat};
use crate::error::{MerakiCtlError, Result as CliResult};
use crate::output;

pub fn handle_operations_command(
    command: &OperationsCommands,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let format = output_format.resolve(output::OutputFormat::Table);

    match command {
        OperationsCommands::List { tag } => {
            let selected: Vec<&OperationDescriptor> = match tag {
                Some(tag) => operations::by_tag(tag).collect(),
                None => OPERATIONS.to_vec(),
            };
            debug!("Listing {} operations", selected.len());

            if selected.is_empty()
                && let Some(tag) = tag
            {
                return Err(MerakiCtlError::InvalidInput {
                    message: format!(
                        "no operations tagged '{}' (known tags: {})",
                        tag,
                        operations::tags().join(", ")
                    ),
                });
            }

            let rows: Vec<Value> = selected.iter().map(|op| summary_row(op)).collect();
            output::print_output(rows, format, query)?;
        }
        OperationsCommands::Show { name } => {
            let op = operations::find(name).ok_or_else(|| MerakiCtlError::UnknownOperation {
                name: name.clone(),
            })?;
            output::print_output(detail(op), format, query)?;
        }
        OperationsCommands::Tags => {
            let rows: Vec<Value> = operations::tags()
                .into_iter()
                .map(|tag| json!({"tag": tag, "operations": operations::by_tag(tag).count()}))
                .collect();
            output::print_output(rows, format, query)?;
        }
    }

    Ok(())
}

fn summary_row(op: &OperationDescriptor) -> Value {
    json!({
        "name": op.name,
        "operationId": op.operation_id(),
        "tag": op.tag,
        "method": op.method.as_str(),
        "path": op.path,
        "paginated": op.is_paginated(),
    })
}

fn detail(op: &OperationDescriptor) -> Value {
    let mut value = json!({
        "name": op.name,
        "operationId": op.operation_id(),
        "tag": op.tag,
        "summary": op.summary(),
        "method": op.method.as_str(),
        "path": op.path,
        "required": op.required,
        "queryParameters": op.query_parameters().collect::<Vec<_>>(),
    });

    if let Some(paging) = op.paging {
        value["pagination"] = json!({
            "total_pages": 1,
            "direction": paging.direction.as_str(),
        });
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use merakictl_core::operations::descriptors;

    #[test]
    fn test_detail_reports_paging_defaults() {
        let value = detail(&descriptors::GET_NETWORK_EVENTS);
        assert_eq!(value["operationId"], "getNetworkEvents");
        assert_eq!(value["required"], json!(["network_id"]));
        assert_eq!(value["pagination"]["direction"], "prev");
        assert_eq!(value["pagination"]["total_pages"], 1);
    }

    #[test]
    fn test_detail_omits_paging_for_single_page_operations() {
        let value = detail(&descriptors::GET_DEVICE);
        assert!(value.get("pagination").is_none());
        assert_eq!(value["method"], "GET");
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let err = handle_operations_command(
            &OperationsCommands::List {
                tag: Some("nonsense".to_string()),
            },
            OutputFormat::Json,
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("known tags"));
    }
}
