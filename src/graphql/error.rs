/// Why a topic lookup for one problem came back without topics.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Request could not be sent, or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not JSON, or not shaped like a question response.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Well-formed response, but it carries no question data.
    #[error("no question data for {title_slug}")]
    NoQuestion { title_slug: String },
}

impl LookupError {
    /// Expected misses (unknown slug, paid-only problem) are not worth a warning.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NoQuestion { .. })
    }
}
