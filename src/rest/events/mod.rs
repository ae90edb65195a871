//! Events product (`events.twilio.com`)

mod schema;

pub use schema::{SchemaContext, SchemaInstance};

use super::{Domain, Version};

/// Default host of the Events API
pub const BASE_URL: &str = "https://events.twilio.com";

/// Events domain
#[derive(Debug, Clone)]
pub struct Events {
    domain: Domain,
}

impl Events {
    /// Wrap a domain
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }

    /// Version 1 of the API
    pub fn v1(&self) -> EventsV1 {
        EventsV1 {
            version: Version::new(self.domain.clone(), "v1"),
        }
    }
}

/// Events API, version 1
#[derive(Debug, Clone)]
pub struct EventsV1 {
    version: Version,
}

impl EventsV1 {
    /// The underlying version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Context for one event schema
    pub fn schemas(&self, id: impl AsRef<str>) -> SchemaContext {
        SchemaContext::new(self.version.clone(), id.as_ref())
    }
}
