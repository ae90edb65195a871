//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::rest::Client;
use futures::TryStreamExt;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing records to stdout
    pub async fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out).await?;
        out.flush()?;
        Ok(())
    }

    /// Run the CLI command against an arbitrary writer
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<()> {
        let client = self.client()?;

        match &self.cli.command {
            Commands::Messages {
                conversation,
                limit,
                page_size,
            } => {
                let list = client.conversations().v1().messages(conversation.as_str());
                let mut stream = list.stream(*limit, *page_size).await?;

                let mut count = 0usize;
                while let Some(message) = stream.try_next().await? {
                    write_line(out, &message)?;
                    count += 1;
                }
                info!("Read {count} messages from {conversation}");
                Ok(())
            }
            Commands::Message { conversation, sid } => {
                let message = client
                    .conversations()
                    .v1()
                    .messages(conversation.as_str())
                    .get(sid)
                    .fetch()
                    .await?;
                write_line(out, &message)
            }
            Commands::Schema { id } => {
                let schema = client.events().v1().schemas(id).fetch().await?;
                write_line(out, &schema)
            }
        }
    }

    /// Build the client from the global flags
    fn client(&self) -> Result<Client> {
        let account_sid = self
            .cli
            .account_sid
            .clone()
            .ok_or_else(|| Error::missing_field("account_sid"))?;
        let auth_token = self
            .cli
            .auth_token
            .clone()
            .ok_or_else(|| Error::missing_field("auth_token"))?;

        let mut builder = ClientConfig::builder().credentials(account_sid, auth_token);
        if let Some(ref base_url) = self.cli.base_url {
            debug!("Overriding base URL with {base_url}");
            builder = builder.base_url(base_url.clone());
        }

        Client::new(builder.build()?)
    }
}

/// Write one record as a JSON line
fn write_line<W: Write, T: Serialize>(out: &mut W, record: &T) -> Result<()> {
    let line = serde_json::to_string(record).context("Failed to encode record")?;
    writeln!(out, "{line}")?;
    Ok(())
}
