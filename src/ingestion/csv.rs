//! CSV record loading.

use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::types::{DataType, Row, Schema, Value};

/// Load records from a CSV file.
///
/// See [`records_from_csv_reader`] for the parsing rules.
pub fn records_from_csv_path(
    path: impl AsRef<Path>,
    schema: Option<&Schema>,
) -> TableResult<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    records_from_csv_reader(&mut rdr, schema)
}

/// Load records from an existing CSV reader.
///
/// Rules:
///
/// - CSV must have headers; every header becomes a field.
/// - Columns declared in `schema` must be present and parse into their declared type.
/// - Other columns are inferred per cell: empty → null, then integer, float, `true`/`false`,
///   falling back to a string.
pub fn records_from_csv_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: Option<&Schema>,
) -> TableResult<Vec<Row>> {
    let headers = rdr.headers()?.clone();

    if let Some(schema) = schema {
        for name in schema.field_names() {
            if !headers.iter().any(|h| h == name) {
                return Err(TableError::SchemaMismatch {
                    message: format!(
                        "missing required column '{name}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>()
                    ),
                });
            }
        }
    }

    let declared: Vec<Option<DataType>> = headers
        .iter()
        .map(|h| schema.and_then(|s| s.field(h)).map(|f| f.data_type))
        .collect();

    let mut rows = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row = Row::new();
        for ((name, raw), data_type) in headers.iter().zip(record.iter()).zip(&declared) {
            let value = match data_type {
                Some(t) => parse_typed_value(user_row, name, *t, raw)?,
                None => infer_value(raw),
            };
            row.insert(name.to_string(), value);
        }
        rows.push(row);
    }

    Ok(rows)
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> TableResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| TableError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Bool => parse_bool(trimmed).map(Value::Bool).map_err(parse_error),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}

fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int64(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return Value::Float64(f);
        }
    }
    match trimmed {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Utf8(trimmed.to_owned()),
    }
}
