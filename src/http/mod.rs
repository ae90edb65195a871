//! HTTP client module
//!
//! Provides the HTTP transport every API domain shares.
//!
//! # Features
//!
//! - **Basic Auth**: Account SID and auth token on every request
//! - **Form Bodies**: Create and update calls send `x-www-form-urlencoded`
//! - **Error Mapping**: Non-2xx responses become typed errors

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
