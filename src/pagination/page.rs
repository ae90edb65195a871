//! A single page of list results
//!
//! Wraps one decoded response body: the ordered raw records plus the links
//! needed to reach the neighbouring pages. Two body shapes are understood:
//!
//! - legacy: top-level `next_page_uri` / `previous_page_uri`, relative to the
//!   API domain
//! - current: a `meta` block with absolute `next_page_url` / `previous_page_url`

use super::types::PageMeta;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use tracing::trace;
use url::Url;

/// Top-level keys of legacy list bodies that never hold records
const LEGACY_META_KEYS: &[&str] = &[
    "end",
    "first_page_uri",
    "next_page_uri",
    "last_page_uri",
    "page",
    "page_size",
    "previous_page_uri",
    "total",
    "num_pages",
    "start",
    "uri",
    "meta",
];

/// One fetched batch of records
#[derive(Debug, Clone)]
pub struct Page {
    key: String,
    records: Vec<JsonValue>,
    meta: Option<PageMeta>,
    next_page_url: Option<Url>,
    previous_page_url: Option<Url>,
}

impl Page {
    /// Build a page from a decoded response body.
    ///
    /// `list_key` names the field holding the records; when `None` it is
    /// taken from `meta.key`, or inferred as the only non-metadata key.
    /// Relative legacy links are resolved against `base_url`.
    pub fn from_json(body: JsonValue, list_key: Option<&str>, base_url: &Url) -> Result<Self> {
        let JsonValue::Object(mut payload) = body else {
            return Err(Error::deserialization("page body is not a JSON object"));
        };

        let meta_block = match payload.get("meta") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::Object(block)) => Some(block),
            Some(_) => return Err(Error::deserialization("page meta block is not an object")),
        };

        let meta = meta_block
            .map(|block| serde_json::from_value::<PageMeta>(JsonValue::Object(block.clone())))
            .transpose()
            .map_err(|e| Error::deserialization(format!("malformed page meta block: {e}")))?;

        let next_page_url = resolve_link(
            &payload,
            meta_block,
            "next_page_url",
            "next_page_uri",
            base_url,
        )?;
        let previous_page_url = resolve_link(
            &payload,
            meta_block,
            "previous_page_url",
            "previous_page_uri",
            base_url,
        )?;

        let key = resolve_list_key(&payload, list_key, meta.as_ref())?;
        let records = match payload.remove(&key) {
            Some(JsonValue::Array(items)) => items,
            Some(_) => {
                return Err(Error::deserialization(format!(
                    "page field '{key}' is not a list"
                )))
            }
            None => {
                return Err(Error::deserialization(format!(
                    "page records can not be deserialized: missing field '{key}'"
                )))
            }
        };

        if let Some(position) = records.iter().position(|r| !r.is_object()) {
            return Err(Error::deserialization(format!(
                "record {position} in '{key}' is not a JSON object"
            )));
        }

        trace!(
            "Loaded page '{key}' with {} records, next: {:?}",
            records.len(),
            next_page_url.as_ref().map(Url::as_str)
        );

        Ok(Self {
            key,
            records,
            meta,
            next_page_url,
            previous_page_url,
        })
    }

    /// Lazily build domain objects from the raw records, in server order
    pub fn records<'a, T, F>(&'a self, factory: F) -> impl Iterator<Item = Result<T>> + 'a
    where
        F: Fn(JsonValue) -> Result<T> + 'a,
    {
        self.records.iter().cloned().map(factory)
    }

    /// Consume the page, keeping only its raw records
    pub fn into_records(self) -> std::vec::IntoIter<JsonValue> {
        self.records.into_iter()
    }

    /// Absolute URL of the next page, `None` on the last page
    pub fn next_page_url(&self) -> Option<&Url> {
        self.next_page_url.as_ref()
    }

    /// Absolute URL of the previous page, `None` on the first page
    pub fn previous_page_url(&self) -> Option<&Url> {
        self.previous_page_url.as_ref()
    }

    /// Check if another page follows this one
    pub fn has_next_page(&self) -> bool {
        self.next_page_url.is_some()
    }

    /// Field name the records were read from
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The `meta` block, for endpoints that send one
    pub fn meta(&self) -> Option<&PageMeta> {
        self.meta.as_ref()
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if this page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Join a relative API path onto a domain base URL
///
/// Exactly one `/` separates the two parts, whatever slashes either side
/// carries.
pub fn absolute_url(base_url: &Url, uri: &str) -> Result<Url> {
    let base = base_url.as_str().trim_end_matches('/');
    let uri = uri.trim_matches('/');
    Ok(Url::parse(&format!("{base}/{uri}"))?)
}

fn resolve_link(
    payload: &JsonObject,
    meta_block: Option<&JsonObject>,
    meta_field: &str,
    legacy_field: &str,
    base_url: &Url,
) -> Result<Option<Url>> {
    // A meta block that carries the field wins, even when it is null
    if let Some(value) = meta_block.and_then(|block| block.get(meta_field)) {
        return match link_text(value, meta_field)? {
            Some(url) => Url::parse(url).map(Some).map_err(|e| {
                Error::deserialization(format!("invalid meta.{meta_field} '{url}': {e}"))
            }),
            None => Ok(None),
        };
    }

    match payload.get(legacy_field) {
        Some(value) => match link_text(value, legacy_field)? {
            Some(uri) => absolute_url(base_url, uri).map(Some).map_err(|e| {
                Error::deserialization(format!("invalid {legacy_field} '{uri}': {e}"))
            }),
            None => Ok(None),
        },
        None => Ok(None),
    }
}

fn link_text<'a>(value: &'a JsonValue, field: &str) -> Result<Option<&'a str>> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(s) if s.is_empty() => Ok(None),
        JsonValue::String(s) => Ok(Some(s.as_str())),
        _ => Err(Error::deserialization(format!(
            "page link '{field}' is not a string"
        ))),
    }
}

fn resolve_list_key(
    payload: &JsonObject,
    list_key: Option<&str>,
    meta: Option<&PageMeta>,
) -> Result<String> {
    if let Some(key) = list_key {
        return Ok(key.to_string());
    }

    if let Some(key) = meta.and_then(|m| m.key.as_deref()) {
        return Ok(key.to_string());
    }

    let mut candidates = payload
        .keys()
        .filter(|k| !LEGACY_META_KEYS.contains(&k.as_str()));

    match (candidates.next(), candidates.next()) {
        (Some(key), None) => Ok(key.clone()),
        (None, _) => Err(Error::deserialization(
            "page records can not be deserialized: no list field",
        )),
        (Some(_), Some(_)) => Err(Error::deserialization(
            "page records can not be deserialized: ambiguous list field",
        )),
    }
}
