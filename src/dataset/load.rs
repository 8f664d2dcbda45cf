use crate::dataset::record::{Dataset, ProblemRecord};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Read a dataset file: a JSON array of problem objects.
///
/// Anything else (missing file, bad JSON, an element that is not an object)
/// is an error; there is no partial load.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read dataset file {}", path.display()))?;

    let records: Dataset = serde_json::from_str(&text)
        .with_context(|| format!("parse dataset file {}", path.display()))?;

    Ok(records)
}

/// Write the dataset as indented JSON, replacing whatever was at `path`.
pub fn save_dataset(path: &Path, records: &[ProblemRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).with_context(|| format!("write dataset file {}", path.display()))?;
    Ok(())
}
