//! The drafting pipeline
//!
//! validate → compile → generate → assemble, with the offline fallback
//! absorbing every generation failure. Each call is a pure function of its
//! request plus two read-only capabilities (the client and the config), so
//! concurrent invocations never interfere.

use chrono::Utc;

use crate::ai::{GenClient, prompts};
use crate::config::{Config, FallbackConfig};
use crate::credentials::CredentialStore;
use crate::error::{GenerationFailure, ValidationError};

use super::fallback::synthesize;
use super::humanize::{SmallRng, humanize};
use super::prompt::compile;
use super::request::{DraftRequest, NormalizedRequest};
use super::types::{DraftMetadata, DraftSource, EmailDraft};

/// Note attached to fallback drafts. Deliberately free of internal error
/// detail; the classified failure goes to the log instead.
const FALLBACK_NOTE: &str =
    "Drafted offline from a built-in template because the AI service was unavailable.";

/// Drafts emails, preferring the generation service and falling back to
/// offline templates.
#[derive(Clone)]
pub struct Drafter {
    client: GenClient,
    fallback: FallbackConfig,
}

impl Drafter {
    /// Build a drafter from config, resolving the service credential once.
    pub fn new(config: &Config) -> Self {
        let api_key = CredentialStore::new().resolve(config.generation.api_key.as_deref());
        Self::with_api_key(config, api_key)
    }

    /// Build a drafter with an already-resolved credential.
    pub fn with_api_key(config: &Config, api_key: Option<String>) -> Self {
        let client = GenClient::new(&config.generation, api_key);
        if !client.is_configured() {
            tracing::info!("No generation API key configured, drafts will use offline templates");
        }
        Self {
            client,
            fallback: config.fallback.clone(),
        }
    }

    /// Run one request through the pipeline.
    ///
    /// The only error a caller can see is a validation rejection; any
    /// generation failure is absorbed by the fallback.
    pub async fn draft(&self, request: DraftRequest) -> Result<EmailDraft, ValidationError> {
        let request = request.validate()?;
        let prompt = compile(&request);

        let outcome = self
            .client
            .complete(prompts::COMPOSE_SYSTEM, &prompt.instruction, prompt.params)
            .await;

        Ok(self.assemble(outcome, &request))
    }

    /// Reconverge the two branches into one result shape.
    fn assemble(
        &self,
        outcome: Result<String, GenerationFailure>,
        request: &NormalizedRequest,
    ) -> EmailDraft {
        match outcome {
            Ok(text) => EmailDraft {
                text,
                source: DraftSource::Generated,
                metadata: self.metadata(request, None),
            },
            Err(failure) => {
                match failure {
                    GenerationFailure::Unconfigured => {
                        tracing::debug!("Generation skipped: {}", failure)
                    }
                    _ => tracing::warn!("Generation failed, using fallback: {}", failure),
                }

                let mut text = synthesize(request);
                if self.fallback.humanize {
                    let mut rng = match self.fallback.humanize_seed {
                        Some(seed) => SmallRng::seeded(seed),
                        None => SmallRng::from_entropy(),
                    };
                    text = humanize(&text, &mut rng);
                }

                EmailDraft {
                    text,
                    source: DraftSource::Fallback,
                    metadata: self.metadata(request, Some(FALLBACK_NOTE.to_string())),
                }
            }
        }
    }

    fn metadata(&self, request: &NormalizedRequest, note: Option<String>) -> DraftMetadata {
        DraftMetadata {
            language: request.language.clone(),
            tone: request.tone.clone(),
            length: request.length,
            generated_at: Utc::now(),
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::request::Length;

    fn unconfigured_drafter() -> Drafter {
        Drafter::with_api_key(&Config::default(), None)
    }

    fn scenario_a_request() -> DraftRequest {
        DraftRequest {
            subject: Some("Project Update".to_string()),
            tone: Some("casual".to_string()),
            length: Some("short".to_string()),
            language: Some("en".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_unconfigured_yields_fallback() {
        let drafter = unconfigured_drafter();
        let draft = drafter.draft(scenario_a_request()).await.unwrap();

        assert_eq!(draft.source, DraftSource::Fallback);
        assert!(draft.text.starts_with("Subject: Project Update"));
        assert!(draft.text.contains("Hi there,"));
        assert!(draft.text.contains("Cheers,"));
        assert!(draft.metadata.note.is_some());
        assert_eq!(draft.metadata.language, "en");
        assert_eq!(draft.metadata.tone, "casual");
        assert_eq!(draft.metadata.length, Length::Short);
    }

    #[tokio::test]
    async fn test_unconfigured_fallback_is_deterministic() {
        let drafter = unconfigured_drafter();
        let first = drafter.draft(scenario_a_request()).await.unwrap();
        let second = drafter.draft(scenario_a_request()).await.unwrap();
        assert_eq!(first.text, second.text);
    }

    #[tokio::test]
    async fn test_empty_subject_and_purpose_rejected() {
        let drafter = unconfigured_drafter();
        let request = DraftRequest {
            subject: Some(String::new()),
            purpose: Some(String::new()),
            ..Default::default()
        };
        let result = drafter.draft(request).await;
        assert_eq!(result.unwrap_err(), ValidationError::MissingSubject);
    }

    #[tokio::test]
    async fn test_unknown_language_still_completes() {
        let drafter = unconfigured_drafter();
        let request = DraftRequest {
            subject: Some("Hello".to_string()),
            language: Some("tlh".to_string()),
            ..Default::default()
        };
        let draft = drafter.draft(request).await.unwrap();

        assert_eq!(draft.source, DraftSource::Fallback);
        assert!(draft.text.starts_with("Subject: Hello"));
        assert!(draft.text.contains("Dear Sir or Madam,"));
        assert!(draft.text.contains("Best regards,"));
        assert_eq!(draft.metadata.language, "tlh");
    }

    #[test]
    fn test_assemble_timeout_uses_fallback_with_note() {
        let drafter = unconfigured_drafter();
        let request = scenario_a_request().validate().unwrap();

        let draft = drafter.assemble(Err(GenerationFailure::Timeout), &request);
        assert_eq!(draft.source, DraftSource::Fallback);
        assert!(draft.text.starts_with("Subject: Project Update"));
        assert_eq!(draft.metadata.note.as_deref(), Some(FALLBACK_NOTE));
    }

    #[test]
    fn test_assemble_success_passes_text_through() {
        let drafter = unconfigured_drafter();
        let request = scenario_a_request().validate().unwrap();

        let generated = "Subject: Project Update\n\nHey!\n\nAll going well.\n\nCheers,\nMe";
        let draft = drafter.assemble(Ok(generated.to_string()), &request);

        assert_eq!(draft.source, DraftSource::Generated);
        assert_eq!(draft.text, generated);
        assert_eq!(draft.metadata.note, None);
    }

    #[test]
    fn test_seeded_humanizer_is_reproducible() {
        let config = Config {
            fallback: FallbackConfig {
                humanize: true,
                humanize_seed: Some(42),
            },
            ..Default::default()
        };
        let drafter = Drafter::with_api_key(&config, None);
        let request = scenario_a_request().validate().unwrap();

        let first = drafter.assemble(Err(GenerationFailure::Unconfigured), &request);
        let second = drafter.assemble(Err(GenerationFailure::Unconfigured), &request);
        assert_eq!(first.text, second.text);
        assert!(first.text.starts_with("Subject: Project Update"));
    }
}
