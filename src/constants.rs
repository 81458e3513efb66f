//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Chat-completions endpoint of the generation service.
pub const GENERATION_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Timeout in seconds for a single generation request.
/// On expiry the pipeline proceeds to the offline fallback.
pub const GENERATION_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature for generation requests.
/// Slightly above the provider default; fixed, never request-controlled.
pub const GENERATION_TEMPERATURE: f32 = 0.8;

/// Maximum response tokens for a short email.
pub const SHORT_MAX_TOKENS: u32 = 256;

/// Maximum response tokens for a medium email.
pub const MEDIUM_MAX_TOKENS: u32 = 512;

/// Maximum response tokens for a long email.
pub const LONG_MAX_TOKENS: u32 = 1024;

/// Probability (percent) that the humanizer inserts a filler phrase
/// at a sentence boundary.
pub const HUMANIZE_FILLER_PERCENT: u64 = 25;
