//! Conversations product (`conversations.twilio.com`)

mod message;

pub use message::{
    CreateMessageParams, MessageContext, MessageInstance, MessageList, UpdateMessageParams,
    WebhookEnabledType,
};

use super::{Domain, Version};

/// Default host of the Conversations API
pub const BASE_URL: &str = "https://conversations.twilio.com";

/// Conversations domain
#[derive(Debug, Clone)]
pub struct Conversations {
    domain: Domain,
}

impl Conversations {
    /// Wrap a domain
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }

    /// Version 1 of the API
    pub fn v1(&self) -> ConversationsV1 {
        ConversationsV1 {
            version: Version::new(self.domain.clone(), "v1"),
        }
    }
}

/// Conversations API, version 1
#[derive(Debug, Clone)]
pub struct ConversationsV1 {
    version: Version,
}

impl ConversationsV1 {
    /// The underlying version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Messages of a conversation
    pub fn messages(&self, conversation_sid: impl Into<String>) -> MessageList {
        MessageList::new(self.version.clone(), conversation_sid)
    }
}
