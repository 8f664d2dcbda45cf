//! Topic lookup against the problem site's GraphQL API.
//!
//! The enricher only sees [`TopicSource`]; [`GraphQlClient`] is the network
//! implementation, tests plug in their own.

pub mod client;
pub mod error;
pub mod response;

pub use client::{DEFAULT_ENDPOINT, GraphQlClient};
pub use error::LookupError;

/// Something that can answer "which topics does this problem have?".
pub trait TopicSource {
    /// Ordered topic names for `title_slug`.
    fn fetch_topics(&self, title_slug: &str) -> Result<Vec<String>, LookupError>;
}
