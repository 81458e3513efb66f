use chrono::{DateTime, Utc};
use serde::Serialize;

use super::request::Length;

/// Where the draft text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    /// Produced by the generation service, passed through unmodified.
    Generated,
    /// Produced offline from the built-in templates.
    Fallback,
}

/// Descriptive metadata stamped onto every draft.
#[derive(Debug, Clone, Serialize)]
pub struct DraftMetadata {
    pub language: String,
    pub tone: String,
    pub length: Length,
    pub generated_at: DateTime<Utc>,
    /// Human-readable explanation when the offline fallback was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Final result of one trip through the drafting pipeline.
///
/// The shape is identical whichever branch produced it; callers that care
/// can inspect `source`.
#[derive(Debug, Clone, Serialize)]
pub struct EmailDraft {
    pub text: String,
    pub source: DraftSource,
    pub metadata: DraftMetadata,
}
