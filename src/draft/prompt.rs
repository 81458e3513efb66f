//! Deterministic prompt compilation
//!
//! Turns a validated request plus the static tables into the user message
//! for the generation service. Identical input always yields a
//! byte-identical instruction; randomness in the result comes only from
//! the service itself.

use std::fmt::Write;

use crate::constants::GENERATION_TEMPERATURE;

use super::request::NormalizedRequest;
use super::tables::{language_spec, length_spec};

/// Parameters sent alongside the instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The compiled instruction plus its generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPrompt {
    pub instruction: String,
    pub params: GenerationParams,
}

/// Compile a request into the instruction for the generation service.
pub fn compile(request: &NormalizedRequest) -> CompiledPrompt {
    let length = length_spec(request.length);
    let mut instruction = String::new();

    match language_spec(&request.language) {
        Some(lang) => {
            let _ = writeln!(instruction, "{}", lang.directive);
        }
        None => {
            // Unknown code still yields an explicit directive; the service
            // may know languages the table does not.
            let _ = writeln!(
                instruction,
                "Write the email in the language with code \"{}\". If you do not know it, write in English.",
                request.language
            );
        }
    }

    match &request.recipient {
        Some(name) => {
            let _ = writeln!(instruction, "The email is addressed to {}.", name);
        }
        None => {
            let _ = writeln!(instruction, "The email is addressed to the recipient.");
        }
    }

    let _ = writeln!(instruction, "The subject of the email is: {}.", request.subject);
    let _ = writeln!(instruction, "Use a {} tone.", request.tone);
    let _ = writeln!(instruction, "Target length: {}.", length.descriptor);

    if let Some(note) = &request.personal_note {
        let _ = writeln!(
            instruction,
            "Work this personal note into the email, keeping its wording: {}",
            note
        );
    }

    let _ = writeln!(
        instruction,
        "Start your reply with the literal line \"Subject: {}\".",
        request.subject
    );
    let _ = writeln!(
        instruction,
        "Use a greeting and a closing that fit the tone."
    );
    let _ = write!(
        instruction,
        "Reply with the email text only, no commentary before or after it."
    );

    CompiledPrompt {
        instruction,
        params: GenerationParams {
            temperature: GENERATION_TEMPERATURE,
            max_tokens: length.max_tokens,
        },
    }
}
