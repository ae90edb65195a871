//! Pagination types
//!
//! Read limits, the wire-level `meta` block, and the cursor state a stream
//! carries between pages.

use serde::Deserialize;
use url::Url;

/// Page size requested when neither a limit nor a page size is given
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the API accepts
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Resolved bounds for one listing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadLimits {
    /// Maximum records to emit across all pages (`None` = unbounded)
    pub limit: Option<usize>,
    /// Records requested per page
    pub page_size: u32,
}

impl Default for ReadLimits {
    fn default() -> Self {
        Self {
            limit: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReadLimits {
    /// Resolve the page size for a listing call.
    ///
    /// - explicit `page_size` always wins
    /// - only `limit` given: `min(limit, MAX_PAGE_SIZE)`, never below 1
    /// - neither given: [`DEFAULT_PAGE_SIZE`]
    pub fn new(limit: Option<usize>, page_size: Option<u32>) -> Self {
        let page_size = match (limit, page_size) {
            (_, Some(size)) => size,
            (Some(limit), None) => {
                let capped = limit.min(MAX_PAGE_SIZE as usize) as u32;
                capped.max(1)
            }
            (None, None) => DEFAULT_PAGE_SIZE,
        };

        Self { limit, page_size }
    }

    /// True when the limit forbids emitting anything at all
    pub fn is_empty(&self) -> bool {
        self.limit == Some(0)
    }
}

/// The `meta` block carried by newer list endpoints
///
/// ```json
/// { "page": 0, "page_size": 50, "key": "messages",
///   "first_page_url": "...", "previous_page_url": null,
///   "next_page_url": "...", "url": "..." }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    /// Zero-based page index
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size the server applied
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Name of the list field holding the records
    #[serde(default)]
    pub key: Option<String>,
    /// Absolute URL of the first page
    #[serde(default)]
    pub first_page_url: Option<String>,
    /// Absolute URL of the previous page
    #[serde(default)]
    pub previous_page_url: Option<String>,
    /// Absolute URL of the next page
    #[serde(default)]
    pub next_page_url: Option<String>,
    /// Absolute URL of this page
    #[serde(default)]
    pub url: Option<String>,
}

/// Cursor state a stream carries between pages
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Absolute URL of the next page, if the last page had one
    pub next_page_url: Option<Url>,
    /// Records emitted so far
    pub emitted: usize,
    /// Pages loaded so far, including the first one
    pub pages_fetched: usize,
    /// Total record limit
    pub limit: Option<usize>,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Check whether the limit has been reached
    pub fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.emitted >= limit)
    }

    /// Count one emitted record
    pub fn add_emitted(&mut self) {
        self.emitted += 1;
    }

    /// Record a freshly loaded page and where it points next
    pub fn add_page(&mut self, next_page_url: Option<Url>) {
        self.pages_fetched += 1;
        self.next_page_url = next_page_url;
    }
}
