//! Unique topic listing across a dataset.

use crate::Result;
use crate::dataset::{ProblemRecord, load_dataset};

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Union of every record's topics, sorted and deduplicated.
pub fn collect_topics(records: &[ProblemRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(ProblemRecord::topics)
        .map(str::to_owned)
        .collect()
}

/// Print the count line followed by one topic per line.
pub fn write_topic_report(topics: &BTreeSet<String>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Total unique topics: {}", topics.len())?;
    writeln!(out, "\nAll unique topics:")?;
    for topic in topics {
        writeln!(out, "{topic}")?;
    }
    Ok(())
}

/// Load `input`, report its unique topics to `out`, and hand the set back.
pub fn print_all_unique_topics(input: &Path, out: &mut impl Write) -> Result<BTreeSet<String>> {
    let records = load_dataset(input)?;
    let topics = collect_topics(&records);
    debug!(records = records.len(), topics = topics.len(), "collected topics");

    write_topic_report(&topics, out)?;
    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn dataset(value: Value) -> Dataset {
        serde_json::from_value(value).unwrap()
    }

    fn report(topics: &BTreeSet<String>) -> String {
        let mut buf = Vec::new();
        write_topic_report(topics, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn mixed_field_names_are_unioned() {
        let records = dataset(json!([
            {"Topics": ["Array"]},
            {"topics": ["Array", "DP"]},
            {"Topics": []},
        ]));

        let topics = collect_topics(&records);

        assert_eq!(report(&topics), "Total unique topics: 2\n\nAll unique topics:\nArray\nDP\n");
    }

    #[test]
    fn primary_field_shadows_legacy_one() {
        let records = dataset(json!([{"Topics": ["Tree"], "topics": ["Graph"]}]));
        let topics: Vec<_> = collect_topics(&records).into_iter().collect();
        assert_eq!(topics, vec!["Tree"]);
    }

    #[test]
    fn records_without_topics_contribute_nothing() {
        let records = dataset(json!([{"TitleSlug": "two-sum"}, {"Topics": null}, {}]));
        let topics = collect_topics(&records);
        assert!(topics.is_empty());
        assert_eq!(report(&topics), "Total unique topics: 0\n\nAll unique topics:\n");
    }

    #[test]
    fn sorted_byte_wise_without_duplicates() {
        let records = dataset(json!([
            {"Topics": ["Two Pointers", "Array", "array"]},
            {"Topics": ["Array", "Bit Manipulation", "Two Pointers"]},
        ]));
        let topics: Vec<_> = collect_topics(&records).into_iter().collect();
        assert_eq!(topics, vec!["Array", "Bit Manipulation", "Two Pointers", "array"]);
    }

    #[test]
    fn reads_from_the_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems_with_topics.json");
        std::fs::write(
            &path,
            r#"[{"TitleSlug": "two-sum", "Topics": ["Hash Table", "Array"]}]"#,
        )
        .unwrap();

        let mut buf = Vec::new();
        let topics = print_all_unique_topics(&path, &mut buf).unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Total unique topics: 2\n\nAll unique topics:\nArray\nHash Table\n"
        );
    }
}
