//! Event schemas
//!
//! `/v1/Schemas/{id}`

use crate::error::{Error, Result};
use crate::rest::Version;
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A versioned event schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaInstance {
    /// Schema identifier, e.g. `Messaging.MessageStatus`
    pub id: String,
    /// Absolute URL of this schema
    #[serde(default)]
    pub url: Option<String>,
    /// Related resources, keyed by name
    #[serde(default)]
    pub links: Option<JsonValue>,
    /// When the latest version was created
    #[serde(default)]
    pub last_created: Option<DateTime<Utc>>,
    /// Latest version number
    #[serde(default)]
    pub last_version: Option<i64>,
}

impl SchemaInstance {
    /// Decode a schema payload
    pub fn from_payload(payload: JsonValue) -> Result<Self> {
        serde_json::from_value(payload)
            .map_err(|e| Error::deserialization(format!("invalid schema record: {e}")))
    }
}

/// One schema, addressed by id
#[derive(Debug, Clone)]
pub struct SchemaContext {
    version: Version,
    id: String,
    uri: String,
}

impl SchemaContext {
    /// Create the context for a schema
    pub fn new(version: Version, id: &str) -> Self {
        Self {
            version,
            id: id.to_string(),
            uri: format!("/Schemas/{id}"),
        }
    }

    /// Schema id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the schema
    pub async fn fetch(&self) -> Result<SchemaInstance> {
        let payload = self.version.fetch(&self.uri).await?;
        SchemaInstance::from_payload(payload)
    }
}
