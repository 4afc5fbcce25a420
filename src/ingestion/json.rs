//! JSON record loading.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single object: `{"a":1}`
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Nested objects are flattened into dot-path fields (`{"user":{"name":"Ada"}}` becomes the field
//! `user.name`). Arrays are kept as their JSON text.

use std::fs;
use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::types::{Row, Value};

/// Load records from a JSON or NDJSON file.
pub fn records_from_json_path(path: impl AsRef<Path>) -> TableResult<Vec<Row>> {
    let text = fs::read_to_string(path)?;
    records_from_json_str(&text)
}

/// Load records from an in-memory JSON or NDJSON string.
///
/// Empty input yields no records.
pub fn records_from_json_str(input: &str) -> TableResult<Vec<Row>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Array(items)) => records_from_values(&items),
        Ok(v @ serde_json::Value::Object(_)) => records_from_values(std::slice::from_ref(&v)),
        Ok(_) => Err(TableError::SchemaMismatch {
            message: "json must be an object, an array of objects, or NDJSON".to_string(),
        }),
        Err(_) => {
            let mut values = Vec::new();
            for (i, line) in trimmed.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                    TableError::SchemaMismatch {
                        message: format!("invalid ndjson at line {}: {}", i + 1, e),
                    }
                })?;
                values.push(v);
            }
            records_from_values(&values)
        }
    }
}

fn records_from_values(values: &[serde_json::Value]) -> TableResult<Vec<Row>> {
    values
        .iter()
        .enumerate()
        .map(|(idx0, v)| {
            let obj = v.as_object().ok_or_else(|| TableError::SchemaMismatch {
                message: format!("row {} is not a json object", idx0 + 1),
            })?;
            let mut row = Row::new();
            flatten_into(&mut row, None, obj);
            Ok(row)
        })
        .collect()
}

fn flatten_into(
    row: &mut Row,
    prefix: Option<&str>,
    obj: &serde_json::Map<String, serde_json::Value>,
) {
    for (key, v) in obj {
        let name = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        match v {
            serde_json::Value::Object(inner) => flatten_into(row, Some(&name), inner),
            other => {
                row.insert(name, scalar_from_json(other));
            }
        }
    }
}

fn scalar_from_json(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int64(i),
            None => n.as_f64().map(Value::Float64).unwrap_or(Value::Null),
        },
        serde_json::Value::String(s) => Value::Utf8(s.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Utf8(v.to_string()),
    }
}
