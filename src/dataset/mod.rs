//! Problem dataset: the JSON array both commands read, and the enricher writes.

pub mod load;
pub mod record;

pub use load::{load_dataset, save_dataset};
pub use record::{Dataset, ProblemRecord};
