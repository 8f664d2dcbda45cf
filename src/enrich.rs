//! Topic enrichment: one lookup per problem, results written back onto the record.

use crate::Result;
use crate::dataset::record::TITLE_SLUG;
use crate::dataset::{ProblemRecord, load_dataset, save_dataset};
use crate::graphql::TopicSource;

use anyhow::Context;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counts for one enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub records: usize,
    /// Records that ended up with at least one topic.
    pub with_topics: usize,
    /// Records whose lookup errored and fell back to no topics.
    pub failed: usize,
}

/// Set `Topics` on every record, in order, from `source`.
///
/// A failed lookup leaves that record with an empty topic list and moves on.
/// A record without a `TitleSlug` stops the run.
pub fn enrich_dataset(
    records: &mut [ProblemRecord],
    source: &impl TopicSource,
) -> Result<EnrichSummary> {
    let total = records.len();
    let mut summary = EnrichSummary {
        records: total,
        ..EnrichSummary::default()
    };

    for (i, record) in records.iter_mut().enumerate() {
        let index = i + 1;
        let slug = record
            .title_slug()
            .map(str::to_owned)
            .with_context(|| format!("record {index}/{total} has no string {TITLE_SLUG}"))?;

        info!("Processing {index}/{total}: {slug}");

        let topics = match source.fetch_topics(&slug) {
            Ok(topics) => topics,
            Err(err) => {
                if err.is_expected() {
                    debug!(title_slug = %slug, error = %err, "no topics available");
                } else {
                    warn!(title_slug = %slug, error = %err, "topic lookup failed");
                }
                summary.failed += 1;
                Vec::new()
            }
        };

        if !topics.is_empty() {
            summary.with_topics += 1;
        }
        info!("  Added topics: {topics:?}");
        record.set_topics(topics);
    }

    Ok(summary)
}

/// Load `input`, enrich it, and write the result to `out`.
pub fn run_enrich(input: &Path, out: &Path, source: &impl TopicSource) -> Result<EnrichSummary> {
    let mut records = load_dataset(input)?;
    info!("Loaded {} problems", records.len());

    let summary = enrich_dataset(&mut records, source)?;
    save_dataset(out, &records)?;

    info!(
        records = summary.records,
        with_topics = summary.with_topics,
        failed = summary.failed,
        "Done! Updated problems saved to {}",
        out.display()
    );
    Ok(summary)
}
