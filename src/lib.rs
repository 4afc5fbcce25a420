//! `table-processing` turns an unordered collection of records plus UI table state (filter
//! criteria, a sort directive and a page descriptor) into a [`processing::ProcessedView`]: one
//! page of records together with its pagination metadata.
//!
//! The primary entrypoint is [`processing::process_table`]. Records are schema-free; anything
//! implementing [`types::Record`] (field lookup by name) can be processed, including the
//! map-backed [`types::Row`].
//!
//! ## Pipeline
//!
//! Steps always run in this order and never modify the input:
//!
//! 1. **Filter**: every non-empty criterion must match. Strings match case-insensitively as
//!    substrings; other values need equality.
//! 2. **Sort**: stable, by a single field. Nulls and missing fields always sort last.
//! 3. **Paginate**: zero-based page index, positive page size. Pages past the end are empty.
//!
//! ```rust
//! use table_processing::processing::{process_table, PageDescriptor, SortDirective, TableState};
//! use table_processing::types::{row, Value};
//!
//! let records = vec![
//!     row([("id", Value::from(1)), ("name", Value::from("Bob"))]),
//!     row([("id", Value::from(2)), ("name", Value::from("Alice"))]),
//! ];
//! let state = TableState {
//!     sort: SortDirective::ascending("name"),
//!     page: PageDescriptor::new(0, 10)?,
//!     ..Default::default()
//! };
//!
//! let view = process_table(&records, &state);
//! assert_eq!(view.rows[0]["name"], Value::from("Alice"));
//! assert_eq!((view.total_count, view.page_count), (2, 1));
//! # Ok::<(), table_processing::TableError>(())
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the [`types::Value`] scalar, the [`types::Record`] capability, [`types::Row`]
//! - [`processing`]: filter/sort/paginate, [`processing::TableState`], cursor pages
//! - [`memo`]: [`memo::TableProcessor`], recomputing only when data or state change
//! - [`ingestion`]: loading records from JSON/NDJSON/CSV sources
//! - [`error`]: [`TableError`] and [`TableResult`]

pub mod error;
pub mod ingestion;
pub mod memo;
pub mod processing;
pub mod types;

pub use error::{TableError, TableResult};
