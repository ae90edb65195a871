// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Twilio REST client
//!
//! Typed access to the Twilio REST API, built around a lazy pagination
//! engine that turns list endpoints into record streams.
//!
//! ## Features
//!
//! - **Lazy Streams**: Pages are fetched only as records are consumed
//! - **Limits**: Cap the number of records, with page sizes chosen to match
//! - **Both Link Shapes**: `meta.next_page_url` and legacy `next_page_uri` pages
//! - **Typed Resources**: List / context / instance triads per resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use twilio_rest::{Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!
//!     let messages = client.conversations().v1().messages("CHxxxxxxxx");
//!     let mut stream = messages.stream(Some(60), None).await?;
//!     while let Some(message) = stream.try_next().await? {
//!         println!("{:?}", message.body);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Resources                              │
//! │  MessageList → stream() / list() / page()    MessageContext     │
//! │  SchemaContext → fetch()                                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────────────┬─────────────────┐
//! │    Version    │          Pagination          │      HTTP       │
//! ├───────────────┼──────────────────────────────┼─────────────────┤
//! │ URI prefix    │ Page (both link shapes)      │ Basic auth      │
//! │ ReadLimits    │ RecordStream (lazy, limited) │ Query / form    │
//! │ PageLoader    │ PageFetcher trait            │ API errors      │
//! └───────────────┴──────────────────────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credentials and client settings
pub mod config;

/// HTTP transport
pub mod http;

/// Page parsing and lazy record streams
pub mod pagination;

/// Domains, versions and resources
pub mod rest;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{Page, PageFetcher, ReadLimits, RecordStream};
pub use rest::Client;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
