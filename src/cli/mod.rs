//! CLI module
//!
//! Command-line interface for reading resources.
//!
//! # Commands
//!
//! - `messages` - Stream the messages of a conversation
//! - `message` - Fetch a single message
//! - `schema` - Fetch an event schema
//!
//! Records are written to stdout as JSON, one per line.

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
