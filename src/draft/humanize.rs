//! Randomized humanizer for fallback drafts
//!
//! Optional decorator that loosens the template register with contractions
//! and occasional filler sentences. All randomness flows through an
//! explicit seedable generator so fallback synthesis itself stays
//! deterministic; seeded runs reproduce byte-for-byte.

use crate::constants::HUMANIZE_FILLER_PERCENT;

/// Contraction substitutions, each applied per paragraph with a coin flip.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("I am ", "I'm "),
    ("do not ", "don't "),
    ("It is ", "It's "),
    ("I would ", "I'd "),
    ("you will ", "you'll "),
];

/// Filler sentences occasionally appended to a body paragraph.
const FILLERS: &[&str] = &[
    "Anyway, just wanted to get this across.",
    "Hope that makes sense.",
    "Let me know what you think.",
];

/// xorshift64* generator, small enough to own outright.
pub struct SmallRng(u64);

impl SmallRng {
    /// Seeded generator; a zero seed is bumped so the state never sticks.
    pub fn seeded(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Fresh generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        let mut buf = [0u8; 8];
        if getrandom::fill(&mut buf).is_err() {
            tracing::warn!("OS entropy unavailable, humanizer falling back to fixed seed");
        }
        Self::seeded(u64::from_le_bytes(buf))
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next() % 100 < percent
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next() % items.len() as u64) as usize]
    }
}

/// Apply the humanizer to a synthesized draft.
///
/// The subject line and the sign-off block are left untouched; only body
/// paragraphs (those ending with a period) are mutated.
pub fn humanize(text: &str, rng: &mut SmallRng) -> String {
    let paragraphs: Vec<String> = text
        .split("\n\n")
        .enumerate()
        .map(|(i, paragraph)| {
            if i == 0 || !paragraph.ends_with('.') {
                return paragraph.to_string();
            }

            let mut paragraph = paragraph.to_string();
            for (formal, contracted) in CONTRACTIONS {
                if paragraph.contains(formal) && rng.chance(50) {
                    paragraph = paragraph.replace(formal, contracted);
                }
            }

            if rng.chance(HUMANIZE_FILLER_PERCENT) {
                paragraph.push(' ');
                paragraph.push_str(rng.pick(FILLERS));
            }

            paragraph
        })
        .collect();

    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAFT: &str = "Subject: Project Update\n\nHi there,\n\nI am writing to you regarding \"Project Update\". I wanted to make sure this reaches you with all the relevant context, and I am happy to provide any further details you might need.\n\nThank you for your time and consideration.\n\nCheers,\n[Your Name]";

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = humanize(DRAFT, &mut SmallRng::seeded(7));
        let second = humanize(DRAFT, &mut SmallRng::seeded(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_subject_line_untouched() {
        for seed in 1..50 {
            let text = humanize(DRAFT, &mut SmallRng::seeded(seed));
            assert!(text.starts_with("Subject: Project Update\n\n"));
        }
    }

    #[test]
    fn test_greeting_and_signoff_untouched() {
        for seed in 1..50 {
            let text = humanize(DRAFT, &mut SmallRng::seeded(seed));
            assert!(text.contains("Hi there,"));
            assert!(text.ends_with("Cheers,\n[Your Name]"));
        }
    }

    #[test]
    fn test_zero_seed_does_not_stick() {
        let mut rng = SmallRng::seeded(0);
        let a = rng.next();
        let b = rng.next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_some_seed_mutates_the_body() {
        // With 50 seeds, at least one must fire a contraction or filler.
        let mutated = (1..50).any(|seed| humanize(DRAFT, &mut SmallRng::seeded(seed)) != DRAFT);
        assert!(mutated);
    }
}
