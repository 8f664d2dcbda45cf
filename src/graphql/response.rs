//! Response shape of the `getQuestionDetail` query.
//!
//! JSON shape:
//! {
//!   "data": {
//!     "question": {
//!       "topicTags": [{ "name": "Array", "slug": "array" }, ...]
//!     }
//!   }
//! }
//!
//! `data` or `question` may be null (unknown slug); `errors` may sit beside
//! `data` and is ignored.

use crate::graphql::error::LookupError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    #[serde(default)]
    pub data: Option<QuestionData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionData {
    #[serde(default)]
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    #[serde(rename = "topicTags")]
    pub topic_tags: Vec<TopicTag>,
}

/// Only the display name is kept; `slug` is requested but unused.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicTag {
    pub name: String,
}

/// Pull the ordered topic names for `title_slug` out of a raw response body.
pub fn parse_topics(title_slug: &str, body: &str) -> Result<Vec<String>, LookupError> {
    let response: QuestionResponse = serde_json::from_str(body)?;

    let question = response
        .data
        .and_then(|d| d.question)
        .ok_or_else(|| LookupError::NoQuestion {
            title_slug: title_slug.to_string(),
        })?;

    Ok(question.topic_tags.into_iter().map(|t| t.name).collect())
}
