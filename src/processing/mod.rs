//! In-memory table transformations.
//!
//! The processing layer turns an unordered collection of [`crate::types::Record`]s plus UI state
//! into a [`ProcessedView`]. Steps always run in the same order:
//!
//! - [`filter_records`]: AND of per-field criteria ([`FilterCriteria`])
//! - [`sort_records`]: stable single-field sort with trailing nulls ([`SortDirective`])
//! - [`paginate`]: zero-indexed fixed-size window ([`PageDescriptor`])
//!
//! [`process_table`] runs all three and [`process_many`] runs several states over one record set.
//! [`cursor`] covers offset-cursor pages for infinite lists.
//!
//! ## Example: filter → sort → paginate
//!
//! ```rust
//! use table_processing::processing::{
//!     process_table, FilterCriteria, LoadState, PageDescriptor, SortDirective, TableState,
//! };
//! use table_processing::types::{row, Value};
//!
//! let records: Vec<_> = (1..=25)
//!     .map(|i| row([("id", Value::from(i)), ("name", Value::from(format!("user {i}")))]))
//!     .collect();
//!
//! let state = TableState::new(
//!     FilterCriteria::new().with("name", "USER"),
//!     SortDirective::descending("id"),
//!     PageDescriptor::new(2, 10)?,
//! );
//! let view = process_table(&records, &state);
//!
//! assert_eq!(view.rows.len(), 5);
//! assert_eq!(view.rows[0]["id"], Value::Int64(5));
//! assert_eq!(view.page_count, 3);
//! assert!(!view.has_next_page);
//! assert!(view.has_previous_page);
//! assert!(!view.is_empty(&LoadState::<()>::Ready));
//! # Ok::<(), table_processing::TableError>(())
//! ```

pub mod cursor;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

pub use cursor::{cursor_page, CursorPage, InfiniteList};
pub use filter::{filter_records, FilterCriteria};
pub use paginate::{page_count, paginate, PageDescriptor, PageRange, DEFAULT_PAGE_SIZE};
pub use sort::{compare_values, locale_cmp, sort_records, SortDirection, SortDirective};
pub use view::{process_many, process_table, LoadState, ProcessedView, TableState};
