//! Pagination module
//!
//! Supports: legacy `next_page_uri` bodies and `meta.next_page_url` bodies
//!
//! # Overview
//!
//! The pagination module turns list endpoints into one lazy record stream.
//! A [`Page`] wraps a single response; [`stream`] walks pages forward on
//! demand through an injected [`PageFetcher`], building records with a
//! per-resource factory and honoring a total record limit.

mod page;
mod stream;
mod types;

pub use page::{absolute_url, Page};
pub use stream::{empty, list, stream, PageFetcher, RecordStream};
pub use types::{PageMeta, PaginationState, ReadLimits, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
