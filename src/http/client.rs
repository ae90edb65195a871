//! HTTP client for the REST API
//!
//! Provides a thin client over reqwest that handles:
//! - Account credentials sent as HTTP Basic auth
//! - Default headers and user agent
//! - Query strings and form-encoded bodies
//! - Mapping non-2xx responses onto the crate error type

use crate::error::{Error, Result};
use crate::types::{JsonValue, Params, StringMap};
use reqwest::{Client, Method, Response};
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
    /// Basic auth username (account SID)
    pub username: Option<String>,
    /// Basic auth password (auth token)
    pub password: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("twilio-rest/{}", env!("CARGO_PKG_VERSION")),
            username: None,
            password: None,
        }
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .field("user_agent", &self.user_agent)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set Basic auth credentials
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self.config.password = Some(password.into());
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: Params,
    /// Request headers
    pub headers: StringMap,
    /// Form-encoded body
    pub form: Option<Params>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append several query parameters
    #[must_use]
    pub fn query_params(mut self, params: Params) -> Self {
        self.query.extend(params);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Merge several headers
    #[must_use]
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set a form-encoded body
    #[must_use]
    pub fn form(mut self, form: Params) -> Self {
        self.form = Some(form);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client shared by every domain of the API
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Make a request to an absolute URL
    ///
    /// Any status outside 2xx is turned into an error; see
    /// [`Error::from_response`].
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let mut req = self.client.request(method.clone(), url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref form) = config.form {
            req = req.form(form);
        }

        if let Some(timeout) = config.timeout {
            req = req.timeout(timeout);
        }

        if let Some(ref username) = self.config.username {
            req = req.basic_auth(username, self.config.password.as_ref());
        }

        debug!("{} {}", method, url);
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("{} {} failed with {}", method, url, status.as_u16());
            return Err(Error::from_response(status.as_u16(), &body));
        }

        Ok(response)
    }

    /// Make a request whose body is decoded as a generic JSON value
    pub async fn request_value(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<JsonValue> {
        let response = self.request(method, url, config).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
