use crate::graphql::TopicSource;
use crate::graphql::error::LookupError;
use crate::graphql::response::parse_topics;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";

/// The endpoint rejects requests without a browser-looking agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const QUESTION_TOPICS_QUERY: &str = r#"
    query getQuestionDetail($titleSlug: String!) {
        question(titleSlug: $titleSlug) {
            topicTags {
                name
                slug
            }
        }
    }
"#;

#[derive(Debug, Serialize)]
struct QueryPayload<'a> {
    query: &'static str,
    variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize)]
struct QueryVariables<'a> {
    #[serde(rename = "titleSlug")]
    title_slug: &'a str,
}

/// Blocking GraphQL client for the problem topic lookup.
#[derive(Debug)]
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
}

impl GraphQlClient {
    /// No timeout is set; requests wait as long as the client's defaults allow.
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TopicSource for GraphQlClient {
    fn fetch_topics(&self, title_slug: &str) -> Result<Vec<String>, LookupError> {
        let payload = QueryPayload {
            query: QUESTION_TOPICS_QUERY,
            variables: QueryVariables { title_slug },
        };

        debug!(endpoint = %self.endpoint, title_slug, "posting topic query");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()?;

        // Status is not checked; error pages end up as Malformed or NoQuestion.
        let status = response.status();
        let body = response.text()?;
        debug!(%status, bytes = body.len(), title_slug, "topic query answered");

        parse_topics(title_slug, &body)
    }
}
