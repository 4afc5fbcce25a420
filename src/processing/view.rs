//! The filter → sort → paginate pipeline and the view it produces.

use serde::{Deserialize, Serialize};

use crate::error::TableResult;
use crate::types::Record;

use super::filter::{filter_records, FilterCriteria};
use super::paginate::{page_count, paginate, PageDescriptor, PageRange};
use super::sort::{sort_records, SortDirective};

/// Filter, sort and page state for one table, as held by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    pub filter: FilterCriteria,
    pub sort: SortDirective,
    pub page: PageDescriptor,
}

impl TableState {
    pub fn new(filter: FilterCriteria, sort: SortDirective, page: PageDescriptor) -> Self {
        Self { filter, sort, page }
    }

    /// Parse state from JSON. Missing sections take their defaults; a zero page size is rejected.
    ///
    /// ```rust
    /// use table_processing::processing::TableState;
    ///
    /// let state = TableState::from_json_str(
    ///     r#"{"filter":{"name":"al"},"page":{"index":1,"size":20}}"#,
    /// )?;
    /// assert_eq!((state.page.index(), state.page.size()), (1, 20));
    /// assert!(state.sort.resolved().is_none());
    /// # Ok::<(), table_processing::TableError>(())
    /// ```
    pub fn from_json_str(input: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Fetch status reported by the data-fetching layer alongside the records.
///
/// The error payload is opaque to this crate; it only suppresses the empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<E> {
    Loading,
    Ready,
    Failed(E),
}

impl<E> LoadState<E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// One page of processed records plus derived pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedView<R> {
    /// Records on the requested page, filtered and sorted.
    pub rows: Vec<R>,
    /// Number of records after filtering, before pagination.
    pub total_count: usize,
    pub page_count: usize,
    /// 1-based inclusive range of the records on this page.
    pub current_page_range: PageRange,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<R> ProcessedView<R> {
    /// Returns `true` when nothing is loading, no fetch error is present, and no record passed
    /// the filter.
    pub fn is_empty<E>(&self, state: &LoadState<E>) -> bool {
        !state.is_loading() && state.error().is_none() && self.total_count == 0
    }

    /// Build the view from an already filtered and sorted collection.
    pub(crate) fn from_sorted(sorted: &[R], page: &PageDescriptor) -> Self
    where
        R: Clone,
    {
        let total_count = sorted.len();
        Self {
            rows: paginate(sorted, page).to_vec(),
            total_count,
            page_count: page_count(total_count, page.size()),
            current_page_range: page.visible_range(total_count),
            has_next_page: page.has_next(total_count),
            has_previous_page: page.has_previous(),
        }
    }
}

/// Run the table pipeline over `records`.
///
/// Records are filtered, stable-sorted, then sliced to the requested page; only the records on
/// that page are cloned. The input slice is left untouched.
///
/// ```rust
/// use table_processing::processing::{process_table, SortDirective, TableState};
/// use table_processing::types::{row, Value};
///
/// let records = vec![
///     row([("id", Value::from(1)), ("name", Value::from("Bob"))]),
///     row([("id", Value::from(2)), ("name", Value::from("Alice"))]),
/// ];
/// let state = TableState {
///     sort: SortDirective::ascending("name"),
///     ..Default::default()
/// };
/// let view = process_table(&records, &state);
/// assert_eq!(view.rows[0]["name"], Value::from("Alice"));
/// assert_eq!(view.total_count, 2);
/// assert_eq!(view.page_count, 1);
/// assert!(!view.has_next_page);
/// ```
pub fn process_table<R: Record + Clone>(records: &[R], state: &TableState) -> ProcessedView<R> {
    let mut filtered = filter_records(records, &state.filter);
    sort_records(&mut filtered, &state.sort);
    let page = ProcessedView::from_sorted(&filtered, &state.page);
    ProcessedView {
        rows: page.rows.into_iter().cloned().collect(),
        total_count: page.total_count,
        page_count: page.page_count,
        current_page_range: page.current_page_range,
        has_next_page: page.has_next_page,
        has_previous_page: page.has_previous_page,
    }
}

/// Run several queries over the same records, one view per state in request order.
///
/// Tables that fetch several queries at once (one per tab, say) share a single record slice.
pub fn process_many<R: Record + Clone>(
    records: &[R],
    states: &[TableState],
) -> Vec<ProcessedView<R>> {
    states.iter().map(|state| process_table(records, state)).collect()
}
