//! Error types for the drafting pipeline

use thiserror::Error;

/// Rejection of an incoming draft request.
///
/// This is the only error surfaced to the caller; everything that goes
/// wrong after validation is absorbed by the offline fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request must contain a non-empty subject or purpose")]
    MissingSubject,
}

/// Classified failure of a single generation attempt.
///
/// Never surfaced to the caller; the pipeline converts every variant into
/// a fallback draft. Detail beyond the variant itself (status codes, parse
/// errors) is logged, not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    /// No usable API key; the service was never contacted.
    #[error("generation service is not configured")]
    Unconfigured,
    /// The service did not answer within the configured deadline.
    #[error("generation request timed out")]
    Timeout,
    /// Network error or non-success status from the service.
    #[error("generation service transport error")]
    Transport,
    /// A success response without generated text where expected.
    #[error("generation service returned a malformed response")]
    MalformedResponse,
}
