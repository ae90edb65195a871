//! Lazy record streams spanning many pages
//!
//! A stream starts from an already-fetched first page and pulls further pages
//! through a [`PageFetcher`] only when the consumer drains the current one.
//! One fetch is in flight at most, pages are never fetched ahead, and the
//! total number of records emitted never exceeds the limit.

use super::page::Page;
use super::types::PaginationState;
use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::debug;
use url::Url;

/// A lazy sequence of records built from one or more pages
pub type RecordStream<'a, T> = BoxStream<'a, Result<T>>;

/// Loads the page behind an absolute URL
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch and decode the page at `url`
    async fn fetch_page(&self, url: &Url) -> Result<Page>;
}

#[async_trait]
impl<'p, P: PageFetcher + ?Sized> PageFetcher for &'p P {
    async fn fetch_page(&self, url: &Url) -> Result<Page> {
        (**self).fetch_page(url).await
    }
}

#[async_trait]
impl<P: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<P> {
    async fn fetch_page(&self, url: &Url) -> Result<Page> {
        (**self).fetch_page(url).await
    }
}

/// Cursor owned by a single stream
struct Cursor<P, F> {
    fetcher: P,
    factory: F,
    records: std::vec::IntoIter<JsonValue>,
    state: PaginationState,
}

impl<P, F> Cursor<P, F> {
    fn load(&mut self, page: Page) {
        self.state.add_page(page.next_page_url().cloned());
        self.records = page.into_records();
    }
}

/// Stream the records of `first_page` and every page after it.
///
/// Records are built with `factory` as they are pulled. Enumeration stops
/// once `limit` records were emitted (even mid-page), or when a page carries
/// no next link. A fetch or factory error is yielded once and ends the
/// stream.
pub fn stream<'a, T, P, F>(
    first_page: Page,
    fetcher: P,
    factory: F,
    limit: Option<usize>,
) -> RecordStream<'a, T>
where
    T: Send + 'a,
    P: PageFetcher + 'a,
    F: Fn(JsonValue) -> Result<T> + Send + 'a,
{
    let mut cursor = Cursor {
        fetcher,
        factory,
        records: Vec::new().into_iter(),
        state: PaginationState::new(limit),
    };
    cursor.load(first_page);

    stream::try_unfold(cursor, |mut cursor| async move {
        loop {
            if cursor.state.limit_reached() {
                debug!(
                    "Record limit reached after {} records in {} pages",
                    cursor.state.emitted, cursor.state.pages_fetched
                );
                return Ok(None);
            }

            if let Some(raw) = cursor.records.next() {
                let record = (cursor.factory)(raw)?;
                cursor.state.add_emitted();
                return Ok(Some((record, cursor)));
            }

            let Some(url) = cursor.state.next_page_url.take() else {
                debug!(
                    "No next page, stream finished after {} records in {} pages",
                    cursor.state.emitted, cursor.state.pages_fetched
                );
                return Ok(None);
            };

            debug!("Fetching page {}: {url}", cursor.state.pages_fetched + 1);
            let page = cursor.fetcher.fetch_page(&url).await?;
            cursor.load(page);
        }
    })
    .boxed()
}

/// Eagerly drain [`stream`] into a vector
pub async fn list<T, P, F>(
    first_page: Page,
    fetcher: P,
    factory: F,
    limit: Option<usize>,
) -> Result<Vec<T>>
where
    T: Send,
    P: PageFetcher,
    F: Fn(JsonValue) -> Result<T> + Send,
{
    stream(first_page, fetcher, factory, limit)
        .try_collect()
        .await
}

/// A stream that yields nothing and fetches nothing
pub fn empty<'a, T: Send + 'a>() -> RecordStream<'a, T> {
    stream::empty().boxed()
}
