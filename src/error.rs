use thiserror::Error;

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by caller-facing constructors and record loaders.
///
/// The filter/sort/paginate pipeline itself never fails; these errors cover contract violations
/// at construction time (page sizes) and failures while loading records.
#[derive(Debug, Error)]
pub enum TableError {
    /// A page size (or cursor page limit) of zero was supplied.
    #[error("invalid page size: {size} (must be > 0)")]
    InvalidPageSize { size: usize },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV source error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON source or state error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (missing columns, non-object rows, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
