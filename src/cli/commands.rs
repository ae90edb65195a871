//! CLI commands and argument parsing

use crate::config::{ACCOUNT_SID_ENV, AUTH_TOKEN_ENV};
use clap::{Parser, Subcommand};

/// Twilio REST command-line client
#[derive(Parser, Debug)]
#[command(name = "twilio-rest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Account SID
    #[arg(long, global = true, env = ACCOUNT_SID_ENV)]
    pub account_sid: Option<String>,

    /// Auth token
    #[arg(long, global = true, env = AUTH_TOKEN_ENV, hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Send every request to this base URL instead of the product hosts
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream the messages of a conversation
    Messages {
        /// Conversation SID
        #[arg(long)]
        conversation: String,

        /// Maximum number of messages
        #[arg(long)]
        limit: Option<usize>,

        /// Records per page request
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Fetch a single message
    Message {
        /// Conversation SID
        #[arg(long)]
        conversation: String,

        /// Message SID
        #[arg(long)]
        sid: String,
    },

    /// Fetch an event schema
    Schema {
        /// Schema id
        #[arg(long)]
        id: String,
    },
}
