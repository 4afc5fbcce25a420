//! Fixed-size, zero-indexed page windows.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page index plus a positive page size.
///
/// The size is validated at construction (including deserialization), so every descriptor that
/// reaches the pipeline is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageDescriptor")]
pub struct PageDescriptor {
    index: usize,
    size: usize,
}

#[derive(Deserialize)]
struct RawPageDescriptor {
    #[serde(default)]
    index: usize,
    #[serde(default = "default_page_size")]
    size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl TryFrom<RawPageDescriptor> for PageDescriptor {
    type Error = TableError;

    fn try_from(raw: RawPageDescriptor) -> TableResult<Self> {
        Self::new(raw.index, raw.size)
    }
}

impl PageDescriptor {
    /// Create a descriptor, rejecting a zero page size.
    pub fn new(index: usize, size: usize) -> TableResult<Self> {
        if size == 0 {
            return Err(TableError::InvalidPageSize { size });
        }
        Ok(Self { index, size })
    }

    /// First page with `size` records per page.
    pub fn first(size: usize) -> TableResult<Self> {
        Self::new(0, size)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Same size, next index.
    pub fn next(&self) -> Self {
        Self {
            index: self.index.saturating_add(1),
            size: self.size,
        }
    }

    /// Same size, previous index (saturating at 0).
    pub fn previous(&self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            size: self.size,
        }
    }

    /// Offset of the first record on this page.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// Half-open slice bounds `[start, end)` clipped to `len`.
    pub fn bounds(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset().min(len);
        let end = self.offset().saturating_add(self.size).min(len);
        start..end
    }

    /// 1-based inclusive range of the records shown on this page.
    ///
    /// `start` is not clipped: a page past the end reports a start beyond `total`.
    pub fn visible_range(&self, total: usize) -> PageRange {
        PageRange {
            start: self.offset().saturating_add(1),
            end: self.offset().saturating_add(self.size).min(total),
        }
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.offset().saturating_add(self.size) < total
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }
}

impl Default for PageDescriptor {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 1-based inclusive range of visible records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

/// Number of pages needed for `total` records; `0` when `total == 0`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Returns the page slice of `records`; out-of-range pages return an empty slice.
pub fn paginate<'a, T>(records: &'a [T], page: &PageDescriptor) -> &'a [T] {
    &records[page.bounds(records.len())]
}
