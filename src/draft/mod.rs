//! Email drafting pipeline
//!
//! This module is the core of penna: request validation, deterministic
//! prompt compilation, and the offline fallback that guarantees a usable
//! email whatever the generation service does.

mod fallback;
mod humanize;
mod pipeline;
mod prompt;
mod request;
pub mod tables;
mod types;

pub use pipeline::Drafter;
pub use prompt::GenerationParams;
pub use request::DraftRequest;
