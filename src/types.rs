//! Common types used throughout the client
//!
//! Shared type aliases and small helpers used by the pagination engine
//! and the REST resources.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Ordered form / query parameters, only the fields that were set
pub type Params = Vec<(String, String)>;

// ============================================================================
// Serialization helpers
// ============================================================================

/// Format a timestamp the way the API expects it in form bodies
pub fn iso8601_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Push `key=value` onto `params` when the value is set
pub fn push_param(params: &mut Params, key: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}
