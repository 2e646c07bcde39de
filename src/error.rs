//! Error taxonomy for the ambient surface around HARDY (forced-aligner
//! adapter wiring, CLI/config loading). The core alignment pipeline itself
//! is infallible — a weak match degrades to a low-confidence `method`, it
//! never becomes an `Err`.

/// Failure kinds surfaced by the forced-aligner seam and ambient tooling.
///
/// Zero input segments is explicitly *not* represented here: it is a valid
/// (empty) result, not an error (`spec.md` §7.3).
#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    #[error("forced-aligner credentials are not configured")]
    Configuration,

    #[error("forced-aligner backend failed: {0}")]
    UpstreamFailure(String),

    #[error("forced aligner returned zero words")]
    EmptyWords,

    #[error("failed to read configuration: {0}")]
    Config(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Serde(#[from] serde_json::Error),
}
