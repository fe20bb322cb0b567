use thiserror::Error;

const UPSTREAM_FALLBACK: &str = "Failed to process request";

/// Every way a recommendation request can fail. The `Display` text is what
/// the caller sees in the `error` field of the response envelope.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Location is required")]
    Validation,

    #[error("Location not found")]
    LocationNotFound,

    #[error("Solar data not found or improperly formatted: {0}")]
    DataFormat(String),

    #[error("{}", upstream_message(.0))]
    Upstream(String),

    #[error("Solar data series is empty")]
    EmptySeries,
}

fn upstream_message(msg: &str) -> &str {
    if msg.trim().is_empty() { UPSTREAM_FALLBACK } else { msg }
}

impl PipelineError {
    /// Only transport-level failures are worth retrying; the rest would fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PipelineError::Upstream(_))
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        PipelineError::Upstream(e.to_string())
    }
}
