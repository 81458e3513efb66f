//! Static lookup tables driving prompt compilation
//!
//! Pure data. Variant behavior (extra languages, different token budgets)
//! belongs here, not in new code paths.

use crate::constants::{LONG_MAX_TOKENS, MEDIUM_MAX_TOKENS, SHORT_MAX_TOKENS};

use super::request::Length;

/// Prompt-facing description of a length tier.
#[derive(Debug)]
pub struct LengthSpec {
    /// Target-size wording embedded in the instruction.
    pub descriptor: &'static str,
    /// Response token budget for this tier.
    pub max_tokens: u32,
}

static SHORT: LengthSpec = LengthSpec {
    descriptor: "brief, 2-3 sentences",
    max_tokens: SHORT_MAX_TOKENS,
};

static MEDIUM: LengthSpec = LengthSpec {
    descriptor: "moderate, 5-7 sentences",
    max_tokens: MEDIUM_MAX_TOKENS,
};

static LONG: LengthSpec = LengthSpec {
    descriptor: "detailed, around 3 paragraphs",
    max_tokens: LONG_MAX_TOKENS,
};

pub fn length_spec(length: Length) -> &'static LengthSpec {
    match length {
        Length::Short => &SHORT,
        Length::Medium => &MEDIUM,
        Length::Long => &LONG,
    }
}

/// Prompt-facing description of a target language.
#[derive(Debug)]
pub struct LanguageSpec {
    pub code: &'static str,
    pub name: &'static str,
    /// Language directive placed first in the instruction.
    pub directive: &'static str,
}

pub static LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        code: "en",
        name: "English",
        directive: "Write the email in English.",
    },
    LanguageSpec {
        code: "es",
        name: "Spanish",
        directive: "Write the email in Spanish (Español).",
    },
    LanguageSpec {
        code: "fr",
        name: "French",
        directive: "Write the email in French (Français).",
    },
    LanguageSpec {
        code: "de",
        name: "German",
        directive: "Write the email in German (Deutsch).",
    },
    LanguageSpec {
        code: "pt",
        name: "Portuguese",
        directive: "Write the email in Portuguese (Português).",
    },
    LanguageSpec {
        code: "it",
        name: "Italian",
        directive: "Write the email in Italian (Italiano).",
    },
];

/// Case-insensitive lookup by language code.
pub fn language_spec(code: &str) -> Option<&'static LanguageSpec> {
    LANGUAGES
        .iter()
        .find(|spec| spec.code.eq_ignore_ascii_case(code.trim()))
}
