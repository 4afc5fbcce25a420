//! Path-based record loading.
//!
//! [`load_records`] reads a source file into `Vec<Row>`, picking the reader from the file
//! extension unless [`LoadOptions::format`] forces one, and reports the outcome to an optional
//! [`LoadObserver`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{TableError, TableResult};
use crate::types::{Row, Schema};

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::{csv, json};

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array-of-objects, single object, or NDJSON.
    Json,
}

impl SourceFormat {
    /// Parse a source format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling [`load_records`].
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<SourceFormat>,
    /// Column types for CSV sources; ignored for JSON.
    pub schema: Option<Schema>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("schema", &self.schema)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            schema: None,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load records from `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` with the record count
/// - `on_failure` with a computed severity
/// - `on_alert` when that severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use table_processing::ingestion::{load_records, LoadOptions, TracingLoadObserver};
/// use table_processing::processing::{process_table, TableState};
///
/// # fn main() -> Result<(), table_processing::TableError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(TracingLoadObserver)),
///     ..Default::default()
/// };
/// let records = load_records("posts.ndjson", &opts)?;
/// let view = process_table(&records, &TableState::default());
/// println!("{} of {} posts", view.rows.len(), view.total_count);
/// # Ok(())
/// # }
/// ```
pub fn load_records(path: impl AsRef<Path>, options: &LoadOptions) -> TableResult<Vec<Row>> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = LoadContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        SourceFormat::Csv => csv::records_from_csv_path(path, options.schema.as_ref()),
        SourceFormat::Json => json::records_from_json_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(rows) => obs.on_success(&ctx, LoadStats { records: rows.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &TableError) -> LoadSeverity {
    match e {
        TableError::Io(_) => LoadSeverity::Critical,
        TableError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        TableError::Json(_)
        | TableError::SchemaMismatch { .. }
        | TableError::ParseError { .. } => LoadSeverity::Error,
        TableError::InvalidPageSize { .. } => LoadSeverity::Warning,
    }
}

fn infer_format_from_path(path: &Path) -> TableResult<SourceFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TableError::SchemaMismatch {
            message: format!("cannot infer format: path has no extension ({})", path.display()),
        })?;

    SourceFormat::from_extension(ext).ok_or_else(|| TableError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}
