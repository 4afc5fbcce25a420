//! Offset-cursor pages and the infinite list that accumulates them.
//!
//! A cursor is the offset of the next record to fetch. [`cursor_page`] serves one page from an
//! in-memory collection; [`InfiniteList`] keeps every fetched page in order so a "load more" UI
//! can render them as a single list.

use serde::Serialize;

use crate::error::{TableError, TableResult};

/// One page fetched through a cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursorPage<R> {
    pub items: Vec<R>,
    /// Cursor the page was fetched with.
    pub cursor: usize,
    /// Cursor for the following page, `None` once the collection is exhausted.
    pub next_cursor: Option<usize>,
}

impl<R> CursorPage<R> {
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Serve up to `limit` records starting at `cursor` (default `0`).
///
/// A cursor past the end yields an empty page with no next cursor.
pub fn cursor_page<R: Clone>(
    records: &[R],
    cursor: Option<usize>,
    limit: usize,
) -> TableResult<CursorPage<R>> {
    if limit == 0 {
        return Err(TableError::InvalidPageSize { size: limit });
    }
    let start = cursor.unwrap_or(0).min(records.len());
    let end = start.saturating_add(limit).min(records.len());
    Ok(CursorPage {
        items: records[start..end].to_vec(),
        cursor: start,
        next_cursor: (end < records.len()).then_some(end),
    })
}

/// Pages accumulated by successive "load more" fetches.
#[derive(Debug, Clone)]
pub struct InfiniteList<R> {
    pages: Vec<CursorPage<R>>,
}

impl<R> Default for InfiniteList<R> {
    fn default() -> Self {
        Self { pages: Vec::new() }
    }
}

impl<R> InfiniteList<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fetched page.
    ///
    /// A page whose cursor does not match [`Self::next_cursor`] is a stale response and is
    /// dropped; returns whether the page was kept.
    pub fn push_page(&mut self, page: CursorPage<R>) -> bool {
        let expected = match self.pages.last() {
            None => 0,
            Some(last) => match last.next_cursor {
                Some(c) => c,
                None => {
                    tracing::trace!(cursor = page.cursor, "ignoring page after end of list");
                    return false;
                }
            },
        };
        if page.cursor != expected {
            tracing::trace!(cursor = page.cursor, expected, "ignoring out-of-order page");
            return false;
        }
        self.pages.push(page);
        true
    }

    /// All items in fetch order.
    pub fn items(&self) -> impl Iterator<Item = &R> {
        self.pages.iter().flat_map(|p| p.items.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[CursorPage<R>] {
        &self.pages
    }

    /// Cursor to fetch next: `Some(0)` before the first fetch, `None` once exhausted.
    pub fn next_cursor(&self) -> Option<usize> {
        match self.pages.last() {
            None => Some(0),
            Some(last) => last.next_cursor,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Drop every page, e.g. after the underlying query changed.
    pub fn reset(&mut self) {
        self.pages.clear();
    }
}
