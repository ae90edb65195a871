//! Error types for the Twilio REST client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for the Twilio REST client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// A required setting was not provided
    #[error("Missing required config field: {field}")]
    MissingConfigField {
        /// Name of the missing setting
        field: String,
    },

    // ============================================================================
    // Deserialization Errors
    // ============================================================================
    /// Response body is not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Payload does not have the expected shape
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// What could not be decoded
        message: String,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response without an API error document
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Non-2xx response carrying the API error document
    #[error("HTTP {status} error {code}: {message}")]
    Rest {
        /// HTTP status code
        status: u16,
        /// API error code
        code: u32,
        /// Human readable message
        message: String,
        /// Link to the error documentation
        more_info: Option<String>,
    },

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else, usually with added context
    #[error("{0}")]
    Other(String),
}

/// Error document returned by the API alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    code: u32,
    message: String,
    #[serde(default)]
    more_info: Option<String>,
    #[serde(default)]
    status: Option<u16>,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a deserialization error
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// Bodies carrying the API's JSON error document become [`Error::Rest`],
    /// anything else falls back to [`Error::HttpStatus`] with the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<RestErrorBody>(body) {
            Ok(doc) => Self::Rest {
                status: doc.status.unwrap_or(status),
                code: doc.code,
                message: doc.message,
                more_info: doc.more_info,
            },
            Err(_) => Self::http_status(status, body),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Rest { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error came from a malformed payload
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Error::Deserialization { .. } | Error::JsonParse(_))
    }
}

/// Result type alias for the Twilio REST client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
