use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the query key for the remote lookup.
pub const TITLE_SLUG: &str = "TitleSlug";

/// Field the enricher writes topics into.
pub const TOPICS: &str = "Topics";

/// Lower-cased topic field found in older datasets.
pub const LEGACY_TOPICS: &str = "topics";

/// A single problem from the dataset.
///
/// Kept as an ordered JSON object so that fields we don't know about (and
/// their order) survive a load/save cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemRecord(pub Map<String, Value>);

/// The whole dataset, in file order.
pub type Dataset = Vec<ProblemRecord>;

impl ProblemRecord {
    pub fn title_slug(&self) -> Option<&str> {
        self.0.get(TITLE_SLUG).and_then(Value::as_str)
    }

    /// Topics already present on the record.
    ///
    /// `Topics` wins when it holds at least one entry; otherwise `topics` is
    /// consulted. Non-string entries are skipped.
    pub fn topics(&self) -> Vec<&str> {
        let primary = string_items(self.0.get(TOPICS));
        if !primary.is_empty() {
            return primary;
        }
        string_items(self.0.get(LEGACY_TOPICS))
    }

    /// Replace `Topics`. An existing key keeps its position; a new one is appended.
    pub fn set_topics(&mut self, topics: Vec<String>) {
        let value = Value::Array(topics.into_iter().map(Value::String).collect());
        self.0.insert(TOPICS.to_string(), value);
    }
}

fn string_items(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}
