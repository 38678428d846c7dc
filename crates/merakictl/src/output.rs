//! Rendering of Dashboard responses as JSON, YAML or tables

use anyhow::{Context, Result};
use comfy_table::Table;
use jpx_core::Runtime;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

static JMESPATH_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// JMESPath runtime with the extended function library
pub fn jmespath_runtime() -> &'static Runtime {
    JMESPATH_RUNTIME.get_or_init(|| Runtime::builder().with_all_extensions().build())
}

/// Quote bare backtick literals so `` [?model==`MR46`] `` compiles.
///
/// JMESPath allows elided quotes inside backticks but the runtime only
/// accepts JSON there. Literals that already parse as JSON are left alone.
fn normalize_backtick_literals(query: &str) -> String {
    static BACKTICK_RE: OnceLock<Regex> = OnceLock::new();
    let re = BACKTICK_RE.get_or_init(|| {
        Regex::new(r"`([^`\\]*(?:\\.[^`\\]*)*)`").expect("backtick pattern is valid")
    });

    re.replace_all(query, |caps: &regex::Captures| {
        let content = &caps[1];
        let trimmed = content.trim();
        if serde_json::from_str::<Value>(trimmed).is_ok() {
            format!("`{}`", content)
        } else {
            let escaped = trimmed.replace('\\', "\\\\").replace('"', "\\\"");
            format!("`\"{}\"`", escaped)
        }
    })
    .into_owned()
}

pub fn compile_jmespath(
    query: &str,
) -> Result<jpx_core::Expression<'static>, jpx_core::JmespathError> {
    jmespath_runtime().compile(&normalize_backtick_literals(query))
}

/// Apply an optional JMESPath query to a value
pub fn apply_query(value: Value, query: Option<&str>) -> Result<Value> {
    let Some(query) = query else {
        return Ok(value);
    };
    let expr = compile_jmespath(query)
        .with_context(|| format!("Invalid JMESPath expression: {}", query))?;
    let result = expr.search(&value).context("JMESPath query failed")?;
    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

/// Render `data` in `format` after applying `query`
pub fn render<T: Serialize>(data: T, format: OutputFormat, query: Option<&str>) -> Result<String> {
    let value = apply_query(serde_json::to_value(data)?, query)?;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&value)?,
        OutputFormat::Yaml => serde_yaml::to_string(&value)?.trim_end().to_string(),
        OutputFormat::Table => render_table(&value),
    };
    Ok(rendered)
}

pub fn print_output<T: Serialize>(
    data: T,
    format: OutputFormat,
    query: Option<&str>,
) -> Result<()> {
    println!("{}", render(data, format, query)?);
    Ok(())
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.iter().any(Value::is_object) => {
            // Dashboard lists are not uniform; use the union of keys in first-seen order
            let mut headers: Vec<&str> = Vec::new();
            for item in items {
                if let Value::Object(obj) = item {
                    for key in obj.keys() {
                        if !headers.contains(&key.as_str()) {
                            headers.push(key);
                        }
                    }
                }
            }

            let mut table = Table::new();
            table.set_header(&headers);
            for item in items {
                let row: Vec<String> = match item {
                    Value::Object(obj) => headers
                        .iter()
                        .map(|h| obj.get(*h).map(format_cell).unwrap_or_default())
                        .collect(),
                    other => vec![format_cell(other)],
                };
                table.add_row(row);
            }
            table.to_string()
        }
        Value::Array(items) if !items.is_empty() => {
            let mut table = Table::new();
            table.set_header(vec!["Value"]);
            for item in items {
                table.add_row(vec![format_cell(item)]);
            }
            table.to_string()
        }
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_header(vec!["Key", "Value"]);
            for (key, val) in obj {
                table.add_row(vec![key.clone(), format_cell(val)]);
            }
            table.to_string()
        }
        other => format_cell(other),
    }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(is_scalar) => items
            .iter()
            .map(format_cell)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}
