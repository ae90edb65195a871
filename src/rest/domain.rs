//! API domains
//!
//! Each product lives on its own host (`conversations.twilio.com`,
//! `events.twilio.com`, ...). A [`Domain`] pairs that base URL with the
//! shared HTTP client.

use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::absolute_url;
use std::sync::Arc;
use url::Url;

/// One product host of the API
#[derive(Debug, Clone)]
pub struct Domain {
    base_url: Url,
    client: Arc<HttpClient>,
}

impl Domain {
    /// Create a domain rooted at `base_url`
    pub fn new(base_url: &str, client: Arc<HttpClient>) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client,
        })
    }

    /// Base URL of this domain
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Shared HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Resolve a path relative to this domain
    pub fn absolute_url(&self, uri: &str) -> Result<Url> {
        absolute_url(&self.base_url, uri)
    }
}
