//! Record loading.
//!
//! Stands in for the document and relational stores that normally feed the table pipeline:
//! sources are read into schema-free [`crate::types::Row`]s.
//!
//! Most callers should use [`load_records`] (from [`loader`]) which:
//!
//! - picks the reader by file extension (or you can override via [`LoadOptions`])
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod loader;
pub mod observability;

pub use loader::{load_records, LoadOptions, SourceFormat};
pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingLoadObserver,
};
