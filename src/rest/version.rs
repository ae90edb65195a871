//! API versions and the request helpers every resource uses
//!
//! A [`Version`] is a path prefix (`v1`) on a [`Domain`]. Resources hand it
//! relative URIs and get back decoded JSON, pages, or record streams.

use super::domain::Domain;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::pagination::{self, Page, PageFetcher, ReadLimits, RecordStream};
use crate::types::{push_param, JsonValue, Params, StringMap};
use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::{Method, StatusCode};
use tracing::debug;
use url::Url;

/// Paging query parameters for a single page request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Opaque token handed out by the API
    pub page_token: Option<String>,
    /// Page number, informational for the server
    pub page_number: Option<u32>,
    /// Records per page
    pub page_size: Option<u32>,
}

impl PageParams {
    /// Request the first page with the given size
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    /// Query parameters for the set fields
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        push_param(&mut params, "PageToken", self.page_token.as_deref());
        push_param(&mut params, "Page", self.page_number);
        push_param(&mut params, "PageSize", self.page_size);
        params
    }
}

/// A versioned path prefix on a domain
#[derive(Debug, Clone)]
pub struct Version {
    domain: Domain,
    version: String,
}

impl Version {
    /// Create a version (e.g. `v1`) on a domain
    pub fn new(domain: Domain, version: impl Into<String>) -> Self {
        Self {
            domain,
            version: version.into(),
        }
    }

    /// The domain this version belongs to
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Version path segment
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Absolute URL of a resource path under this version
    pub fn absolute_url(&self, uri: &str) -> Result<Url> {
        let relative = format!(
            "{}/{}",
            self.version.trim_matches('/'),
            uri.trim_start_matches('/')
        );
        self.domain.absolute_url(&relative)
    }

    /// Resolve limit and page size for a listing call
    pub fn read_limits(&self, limit: Option<usize>, page_size: Option<u32>) -> ReadLimits {
        ReadLimits::new(limit, page_size)
    }

    /// GET a single resource
    pub async fn fetch(&self, uri: &str) -> Result<JsonValue> {
        let url = self.absolute_url(uri)?;
        self.domain
            .client()
            .request_value(Method::GET, url.as_str(), RequestConfig::new())
            .await
    }

    /// POST a form to create a resource
    pub async fn create(&self, uri: &str, data: Params, headers: StringMap) -> Result<JsonValue> {
        self.post(uri, data, headers).await
    }

    /// POST a form to update a resource
    pub async fn update(&self, uri: &str, data: Params, headers: StringMap) -> Result<JsonValue> {
        self.post(uri, data, headers).await
    }

    /// DELETE a resource, `true` when the server answers 204
    pub async fn delete(&self, uri: &str, headers: StringMap) -> Result<bool> {
        let url = self.absolute_url(uri)?;
        let response = self
            .domain
            .client()
            .request(
                Method::DELETE,
                url.as_str(),
                RequestConfig::new().headers(headers),
            )
            .await?;
        Ok(response.status() == StatusCode::NO_CONTENT)
    }

    /// Fetch one page of a list resource
    pub async fn page(&self, uri: &str, params: &PageParams, list_key: Option<&str>) -> Result<Page> {
        let url = self.absolute_url(uri)?;
        let body = self
            .domain
            .client()
            .request_value(
                Method::GET,
                url.as_str(),
                RequestConfig::new().query_params(params.to_params()),
            )
            .await?;
        Page::from_json(body, list_key, self.domain.base_url())
    }

    /// Fetch the page behind an API-generated URL
    pub async fn get_page(&self, target_url: &str, list_key: Option<&str>) -> Result<Page> {
        let url = Url::parse(target_url)?;
        self.loader(list_key).fetch_page(&url).await
    }

    /// Page fetcher for one list resource
    pub fn loader(&self, list_key: Option<&str>) -> PageLoader {
        PageLoader {
            version: self.clone(),
            list_key: list_key.map(str::to_string),
        }
    }

    /// Stream the records of a list resource.
    ///
    /// The first page is requested right away with the resolved page size;
    /// later pages are fetched as the stream is drained. A limit of zero
    /// returns an empty stream without touching the network.
    pub async fn stream<T, F>(
        &self,
        uri: &str,
        limits: ReadLimits,
        list_key: Option<&str>,
        factory: F,
    ) -> Result<RecordStream<'static, T>>
    where
        T: Send + 'static,
        F: Fn(JsonValue) -> Result<T> + Send + 'static,
    {
        if limits.is_empty() {
            debug!("Limit is zero, skipping {uri}");
            return Ok(pagination::empty());
        }

        let params = PageParams::with_page_size(limits.page_size);
        let first = self.page(uri, &params, list_key).await?;
        Ok(pagination::stream(
            first,
            self.loader(list_key),
            factory,
            limits.limit,
        ))
    }

    /// Eagerly read every record of a list resource, up to the limit
    pub async fn list<T, F>(
        &self,
        uri: &str,
        limits: ReadLimits,
        list_key: Option<&str>,
        factory: F,
    ) -> Result<Vec<T>>
    where
        T: Send + 'static,
        F: Fn(JsonValue) -> Result<T> + Send + 'static,
    {
        self.stream(uri, limits, list_key, factory)
            .await?
            .try_collect()
            .await
    }

    async fn post(&self, uri: &str, data: Params, headers: StringMap) -> Result<JsonValue> {
        let url = self.absolute_url(uri)?;
        self.domain
            .client()
            .request_value(
                Method::POST,
                url.as_str(),
                RequestConfig::new().form(data).headers(headers),
            )
            .await
    }
}

/// Fetches follow-up pages of one list resource through its [`Version`]
#[derive(Debug, Clone)]
pub struct PageLoader {
    version: Version,
    list_key: Option<String>,
}

#[async_trait]
impl PageFetcher for PageLoader {
    async fn fetch_page(&self, url: &Url) -> Result<Page> {
        let domain = self.version.domain();
        let body = domain
            .client()
            .request_value(Method::GET, url.as_str(), RequestConfig::new())
            .await?;
        Page::from_json(body, self.list_key.as_deref(), domain.base_url())
    }
}
