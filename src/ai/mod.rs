//! Generation service integration
//!
//! This module wraps the OpenRouter chat-completions API behind a small
//! client that classifies every failure mode, so the drafting pipeline can
//! always fall back to offline templates.

mod client;
pub mod prompts;

pub use client::GenClient;
