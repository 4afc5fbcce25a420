//! Memoized table processing.
//!
//! A [`TableProcessor`] remembers the last `(data, state)` pair it processed. Data identity is
//! the `Arc` allocation (`Arc::ptr_eq`), state identity is [`TableState`] equality. While neither
//! changes, [`TableProcessor::process`] hands back the cached view without recomputing.

use std::sync::Arc;

use crate::processing::{process_table, ProcessedView, TableState};
use crate::types::Record;

struct CachedView<R> {
    data: Arc<Vec<R>>,
    state: TableState,
    view: Arc<ProcessedView<R>>,
}

/// Counters describing how often the cache was used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// Caches the most recent [`ProcessedView`].
pub struct TableProcessor<R> {
    last: Option<CachedView<R>>,
    stats: MemoStats,
}

impl<R> Default for TableProcessor<R> {
    fn default() -> Self {
        Self {
            last: None,
            stats: MemoStats::default(),
        }
    }
}

impl<R: Record + Clone> TableProcessor<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the view for `(data, state)`, recomputing only if either changed since last call.
    pub fn process(&mut self, data: &Arc<Vec<R>>, state: &TableState) -> Arc<ProcessedView<R>> {
        if let Some(cached) = &self.last {
            if Arc::ptr_eq(&cached.data, data) && cached.state == *state {
                self.stats.hits += 1;
                tracing::trace!(hits = self.stats.hits, "table view cache hit");
                return Arc::clone(&cached.view);
            }
        }

        self.stats.misses += 1;
        let view = Arc::new(process_table(data.as_slice(), state));
        tracing::debug!(
            records = data.len(),
            total_count = view.total_count,
            page_index = state.page.index(),
            misses = self.stats.misses,
            "recomputed table view"
        );
        self.last = Some(CachedView {
            data: Arc::clone(data),
            state: state.clone(),
            view: Arc::clone(&view),
        });
        view
    }

    /// Drop the cached view so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}
