//! Conversation messages
//!
//! `/v1/Conversations/{conversation_sid}/Messages[/{sid}]`
//!
//! - [`MessageList`] creates messages and lists them page by page
//! - [`MessageContext`] fetches, updates and deletes one message
//! - [`MessageInstance`] is the decoded resource

use crate::error::{Error, Result};
use crate::pagination::{Page, RecordStream};
use crate::rest::{PageParams, Version};
use crate::types::{iso8601_datetime, push_param, JsonValue, Params, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field holding the records in list responses
const LIST_KEY: &str = "messages";

/// Header toggling webhooks for a single write
const WEBHOOK_HEADER: &str = "X-Twilio-Webhook-Enabled";

/// Value of the `X-Twilio-Webhook-Enabled` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEnabledType {
    /// Fire webhooks for this request
    True,
    /// Suppress webhooks for this request
    False,
}

impl fmt::Display for WebhookEnabledType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
        }
    }
}

fn webhook_headers(webhook_enabled: Option<WebhookEnabledType>) -> StringMap {
    let mut headers = StringMap::new();
    if let Some(value) = webhook_enabled {
        headers.insert(WEBHOOK_HEADER.to_string(), value.to_string());
    }
    headers
}

// ============================================================================
// Parameters
// ============================================================================

/// Fields for creating a message; unset fields are not sent
#[derive(Debug, Clone, Default)]
pub struct CreateMessageParams {
    /// Channel-specific identifier of the author
    pub author: Option<String>,
    /// Message text
    pub body: Option<String>,
    /// Backdated creation time
    pub date_created: Option<DateTime<Utc>>,
    /// Backdated update time
    pub date_updated: Option<DateTime<Utc>>,
    /// Free-form JSON string
    pub attributes: Option<String>,
    /// Media SID to attach
    pub media_sid: Option<String>,
    /// Webhook toggle header
    pub webhook_enabled: Option<WebhookEnabledType>,
}

impl CreateMessageParams {
    /// Create empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the message text
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the attributes JSON string
    #[must_use]
    pub fn attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Attach media
    #[must_use]
    pub fn media_sid(mut self, media_sid: impl Into<String>) -> Self {
        self.media_sid = Some(media_sid.into());
        self
    }

    /// Set the webhook toggle
    #[must_use]
    pub fn webhook_enabled(mut self, enabled: WebhookEnabledType) -> Self {
        self.webhook_enabled = Some(enabled);
        self
    }

    /// Form body for the set fields
    pub fn to_form(&self) -> Params {
        let mut form = Params::new();
        push_param(&mut form, "Author", self.author.as_deref());
        push_param(&mut form, "Body", self.body.as_deref());
        push_param(
            &mut form,
            "DateCreated",
            self.date_created.as_ref().map(iso8601_datetime),
        );
        push_param(
            &mut form,
            "DateUpdated",
            self.date_updated.as_ref().map(iso8601_datetime),
        );
        push_param(&mut form, "Attributes", self.attributes.as_deref());
        push_param(&mut form, "MediaSid", self.media_sid.as_deref());
        form
    }
}

/// Fields for updating a message; unset fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateMessageParams {
    /// Channel-specific identifier of the author
    pub author: Option<String>,
    /// Message text
    pub body: Option<String>,
    /// Creation time
    pub date_created: Option<DateTime<Utc>>,
    /// Update time
    pub date_updated: Option<DateTime<Utc>>,
    /// Free-form JSON string
    pub attributes: Option<String>,
    /// Webhook toggle header
    pub webhook_enabled: Option<WebhookEnabledType>,
}

impl UpdateMessageParams {
    /// Create empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the message text
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the attributes JSON string
    #[must_use]
    pub fn attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Set the webhook toggle
    #[must_use]
    pub fn webhook_enabled(mut self, enabled: WebhookEnabledType) -> Self {
        self.webhook_enabled = Some(enabled);
        self
    }

    /// Form body for the set fields
    pub fn to_form(&self) -> Params {
        let mut form = Params::new();
        push_param(&mut form, "Author", self.author.as_deref());
        push_param(&mut form, "Body", self.body.as_deref());
        push_param(
            &mut form,
            "DateCreated",
            self.date_created.as_ref().map(iso8601_datetime),
        );
        push_param(
            &mut form,
            "DateUpdated",
            self.date_updated.as_ref().map(iso8601_datetime),
        );
        push_param(&mut form, "Attributes", self.attributes.as_deref());
        form
    }
}

// ============================================================================
// Instance
// ============================================================================

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageInstance {
    /// Account that owns the message
    #[serde(default)]
    pub account_sid: Option<String>,
    /// Conversation the message belongs to
    #[serde(default)]
    pub conversation_sid: String,
    /// Unique message identifier
    pub sid: String,
    /// Position of the message within the conversation
    #[serde(default)]
    pub index: Option<i64>,
    /// Channel-specific author identifier
    #[serde(default)]
    pub author: Option<String>,
    /// Message text
    #[serde(default)]
    pub body: Option<String>,
    /// Attached media descriptors
    #[serde(default)]
    pub media: Option<JsonValue>,
    /// Free-form JSON string
    #[serde(default)]
    pub attributes: Option<String>,
    /// Participant that authored the message
    #[serde(default)]
    pub participant_sid: Option<String>,
    /// When the message was created
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// When the message was last updated
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this message
    #[serde(default)]
    pub url: Option<String>,
    /// Delivery status summary for non-chat participants
    #[serde(default)]
    pub delivery: Option<JsonValue>,
    /// URLs of related resources
    #[serde(default)]
    pub links: Option<JsonValue>,
}

impl MessageInstance {
    /// Decode one raw record, filling the conversation SID from the request
    /// path when the payload omits it
    pub fn from_payload(payload: JsonValue, conversation_sid: &str) -> Result<Self> {
        let mut instance: Self = serde_json::from_value(payload)
            .map_err(|e| Error::deserialization(format!("invalid message record: {e}")))?;
        if instance.conversation_sid.is_empty() {
            instance.conversation_sid = conversation_sid.to_string();
        }
        Ok(instance)
    }

    /// Context for acting on this message
    pub fn context(&self, version: &Version) -> MessageContext {
        MessageContext::new(version.clone(), &self.conversation_sid, &self.sid)
    }

    /// Re-fetch this message
    pub async fn fetch(&self, version: &Version) -> Result<MessageInstance> {
        self.context(version).fetch().await
    }

    /// Update this message
    pub async fn update(
        &self,
        version: &Version,
        params: &UpdateMessageParams,
    ) -> Result<MessageInstance> {
        self.context(version).update(params).await
    }

    /// Delete this message, `true` when the server confirmed with 204
    pub async fn delete(
        &self,
        version: &Version,
        webhook_enabled: Option<WebhookEnabledType>,
    ) -> Result<bool> {
        self.context(version).delete(webhook_enabled).await
    }
}

// ============================================================================
// List
// ============================================================================

/// Messages of one conversation
#[derive(Debug, Clone)]
pub struct MessageList {
    version: Version,
    conversation_sid: String,
    uri: String,
}

impl MessageList {
    /// Create the list for a conversation
    pub fn new(version: Version, conversation_sid: impl Into<String>) -> Self {
        let conversation_sid = conversation_sid.into();
        let uri = format!("/Conversations/{conversation_sid}/Messages");
        Self {
            version,
            conversation_sid,
            uri,
        }
    }

    /// Relative URI of the list
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Create a message
    pub async fn create(&self, params: &CreateMessageParams) -> Result<MessageInstance> {
        let payload = self
            .version
            .create(
                &self.uri,
                params.to_form(),
                webhook_headers(params.webhook_enabled),
            )
            .await?;
        MessageInstance::from_payload(payload, &self.conversation_sid)
    }

    /// Lazily stream messages, fetching pages as they are consumed.
    ///
    /// `limit` caps the total number of records; `page_size` defaults to 50,
    /// or to `min(limit, 1000)` when only a limit is given.
    pub async fn stream(
        &self,
        limit: Option<usize>,
        page_size: Option<u32>,
    ) -> Result<RecordStream<'static, MessageInstance>> {
        let limits = self.version.read_limits(limit, page_size);
        self.version
            .stream(&self.uri, limits, Some(LIST_KEY), self.factory())
            .await
    }

    /// Eagerly read messages into memory, up to `limit`
    pub async fn list(
        &self,
        limit: Option<usize>,
        page_size: Option<u32>,
    ) -> Result<Vec<MessageInstance>> {
        let limits = self.version.read_limits(limit, page_size);
        self.version
            .list(&self.uri, limits, Some(LIST_KEY), self.factory())
            .await
    }

    /// Fetch a single page of raw records
    pub async fn page(&self, params: &PageParams) -> Result<Page> {
        self.version.page(&self.uri, params, Some(LIST_KEY)).await
    }

    /// Fetch the page behind an API-generated URL
    pub async fn get_page(&self, target_url: &str) -> Result<Page> {
        self.version.get_page(target_url, Some(LIST_KEY)).await
    }

    /// Record factory building instances of this list
    pub fn factory(&self) -> impl Fn(JsonValue) -> Result<MessageInstance> + Send + Sync + 'static {
        let conversation_sid = self.conversation_sid.clone();
        move |raw| MessageInstance::from_payload(raw, &conversation_sid)
    }

    /// Context for one message
    pub fn get(&self, sid: impl AsRef<str>) -> MessageContext {
        MessageContext::new(self.version.clone(), &self.conversation_sid, sid.as_ref())
    }
}

// ============================================================================
// Context
// ============================================================================

/// One message, addressed by conversation and message SID
#[derive(Debug, Clone)]
pub struct MessageContext {
    version: Version,
    conversation_sid: String,
    sid: String,
    uri: String,
}

impl MessageContext {
    /// Create the context for a message
    pub fn new(version: Version, conversation_sid: &str, sid: &str) -> Self {
        Self {
            version,
            conversation_sid: conversation_sid.to_string(),
            sid: sid.to_string(),
            uri: format!("/Conversations/{conversation_sid}/Messages/{sid}"),
        }
    }

    /// Relative URI of the message
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Message SID
    pub fn sid(&self) -> &str {
        &self.sid
    }

    /// Fetch the message
    pub async fn fetch(&self) -> Result<MessageInstance> {
        let payload = self.version.fetch(&self.uri).await?;
        MessageInstance::from_payload(payload, &self.conversation_sid)
    }

    /// Update the message
    pub async fn update(&self, params: &UpdateMessageParams) -> Result<MessageInstance> {
        let payload = self
            .version
            .update(
                &self.uri,
                params.to_form(),
                webhook_headers(params.webhook_enabled),
            )
            .await?;
        MessageInstance::from_payload(payload, &self.conversation_sid)
    }

    /// Delete the message, `true` when the server confirmed with 204
    pub async fn delete(&self, webhook_enabled: Option<WebhookEnabledType>) -> Result<bool> {
        self.version
            .delete(&self.uri, webhook_headers(webhook_enabled))
            .await
    }
}
