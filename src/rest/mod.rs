//! REST resources
//!
//! [`Client`] owns the shared HTTP transport and hands out one entry point per
//! product domain. Every resource follows the list / context / instance
//! layout and lists its records through the pagination engine.
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use twilio_rest::{Client, ClientConfig};
//!
//! let client = Client::new(ClientConfig::from_env()?)?;
//! let messages = client.conversations().v1().messages("CHxxxxxxxx");
//!
//! let mut stream = messages.stream(Some(60), None).await?;
//! while let Some(message) = stream.try_next().await? {
//!     println!("{}: {:?}", message.sid, message.body);
//! }
//! ```

pub mod conversations;
pub mod events;

mod domain;
mod version;

pub use domain::Domain;
pub use version::{PageLoader, PageParams, Version};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use conversations::Conversations;
use events::Events;
use std::sync::Arc;
use tracing::debug;

/// Entry point to the API
#[derive(Debug, Clone)]
pub struct Client {
    account_sid: String,
    conversations: Domain,
    events: Domain,
}

impl Client {
    /// Create a client from a config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Arc::new(HttpClient::with_config(config.http_config())?);

        let domain = |default_base: &str| {
            let base = config.base_url.as_deref().unwrap_or(default_base);
            debug!("Using {base} for {default_base}");
            Domain::new(base, Arc::clone(&http))
        };

        Ok(Self {
            conversations: domain(conversations::BASE_URL)?,
            events: domain(events::BASE_URL)?,
            account_sid: config.account_sid,
        })
    }

    /// Create a client from `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Account the client authenticates as
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Conversations product
    pub fn conversations(&self) -> Conversations {
        Conversations::new(self.conversations.clone())
    }

    /// Events product
    pub fn events(&self) -> Events {
        Events::new(self.events.clone())
    }
}
