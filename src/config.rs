//! Client configuration
//!
//! Credentials and transport settings for [`crate::Client`].
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_rest::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .credentials("ACxxxxxxxx", "your_auth_token")
//!     .timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::StringMap;
use std::time::Duration;

/// Environment variable holding the account SID
pub const ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";

/// Environment variable holding the auth token
pub const AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";

/// Settings shared by every domain of the client
#[derive(Clone)]
pub struct ClientConfig {
    /// Account SID, also the Basic auth username
    pub account_sid: String,
    /// Auth token, the Basic auth password
    pub auth_token: String,
    /// Replaces every product domain (proxies, local mocks)
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: Option<String>,
    /// Headers sent with every request
    pub default_headers: StringMap,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config from explicit credentials
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        Self::builder().credentials(account_sid, auth_token).build()
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read credentials from `TWILIO_ACCOUNT_SID` and `TWILIO_AUTH_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(sid) = lookup(ACCOUNT_SID_ENV) {
            builder = builder.account_sid(sid);
        }
        if let Some(token) = lookup(AUTH_TOKEN_ENV) {
            builder = builder.auth_token(token);
        }
        builder.build()
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(self.timeout)
            .basic_auth(&self.account_sid, &self.auth_token);

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    account_sid: Option<String>,
    auth_token: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    default_headers: StringMap,
}

impl ClientConfigBuilder {
    /// Set account SID and auth token together
    pub fn credentials(self, account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        self.account_sid(account_sid).auth_token(auth_token)
    }

    /// Set the account SID
    pub fn account_sid(mut self, sid: impl Into<String>) -> Self {
        self.account_sid = Some(sid.into());
        self
    }

    /// Set the auth token
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Route every domain through this base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the config, failing when a credential is missing or empty
    pub fn build(self) -> Result<ClientConfig> {
        let account_sid = self
            .account_sid
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::missing_field("account_sid"))?;
        let auth_token = self
            .auth_token
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::missing_field("auth_token"))?;

        if let Some(url) = &self.base_url {
            url::Url::parse(url)
                .map_err(|e| Error::config(format!("invalid base_url '{url}': {e}")))?;
        }

        Ok(ClientConfig {
            account_sid,
            auth_token,
            base_url: self.base_url,
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
            user_agent: self.user_agent,
            default_headers: self.default_headers,
        })
    }
}
