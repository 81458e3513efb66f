//! Draft request decoding and validation

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Incoming draft request, as decoded by the shell.
///
/// Field names are camelCase on the wire. Every field except the
/// subject/purpose pair is optional and has a defined default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftRequest {
    pub recipient_name: Option<String>,
    pub subject: Option<String>,
    pub purpose: Option<String>,
    pub tone: Option<String>,
    pub personal_note: Option<String>,
    pub length: Option<String>,
    pub language: Option<String>,
}

/// Desired length tier of the drafted email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    /// Lenient parse; anything unrecognized means medium.
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }
}

/// A validated request, immutable through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub recipient: Option<String>,
    /// Non-empty; taken from `subject`, or `purpose` when subject is absent.
    pub subject: String,
    pub tone: String,
    pub personal_note: Option<String>,
    pub length: Length,
    /// Raw language code as supplied; unknown codes are kept and handled
    /// downstream with English-default behavior.
    pub language: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl DraftRequest {
    /// Check required fields and normalize the rest to their defaults.
    pub fn validate(self) -> Result<NormalizedRequest, ValidationError> {
        let subject = non_empty(self.subject)
            .or_else(|| non_empty(self.purpose))
            .ok_or(ValidationError::MissingSubject)?;

        Ok(NormalizedRequest {
            recipient: non_empty(self.recipient_name),
            subject,
            tone: non_empty(self.tone).unwrap_or_else(|| "professional".to_string()),
            personal_note: non_empty(self.personal_note),
            length: self.length.as_deref().map(Length::parse).unwrap_or_default(),
            language: non_empty(self.language).unwrap_or_else(|| "en".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_subject_and_purpose_rejected() {
        let request = DraftRequest {
            subject: Some("   ".to_string()),
            purpose: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingSubject));

        assert_eq!(
            DraftRequest::default().validate(),
            Err(ValidationError::MissingSubject)
        );
    }

    #[test]
    fn test_purpose_stands_in_for_subject() {
        let request = DraftRequest {
            purpose: Some("schedule a meeting".to_string()),
            ..Default::default()
        };
        let normalized = request.validate().unwrap();
        assert_eq!(normalized.subject, "schedule a meeting");
    }

    #[test]
    fn test_subject_wins_over_purpose() {
        let request = DraftRequest {
            subject: Some("Project Update".to_string()),
            purpose: Some("something else".to_string()),
            ..Default::default()
        };
        assert_eq!(request.validate().unwrap().subject, "Project Update");
    }

    #[test]
    fn test_optional_fields_default() {
        let request = DraftRequest {
            subject: Some("Hello".to_string()),
            ..Default::default()
        };
        let normalized = request.validate().unwrap();
        assert_eq!(normalized.recipient, None);
        assert_eq!(normalized.tone, "professional");
        assert_eq!(normalized.personal_note, None);
        assert_eq!(normalized.length, Length::Medium);
        assert_eq!(normalized.language, "en");
    }

    #[test]
    fn test_unknown_length_means_medium() {
        let request = DraftRequest {
            subject: Some("Hello".to_string()),
            length: Some("gigantic".to_string()),
            ..Default::default()
        };
        assert_eq!(request.validate().unwrap().length, Length::Medium);
    }

    #[test]
    fn test_length_parse_is_case_insensitive() {
        assert_eq!(Length::parse("SHORT"), Length::Short);
        assert_eq!(Length::parse(" Long "), Length::Long);
        assert_eq!(Length::parse("medium"), Length::Medium);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{
            "recipientName": "Alice",
            "subject": "Project Update",
            "personalNote": "See you Friday",
            "length": "short",
            "language": "fr"
        }"#;
        let request: DraftRequest = serde_json::from_str(json).unwrap();
        let normalized = request.validate().unwrap();
        assert_eq!(normalized.recipient.as_deref(), Some("Alice"));
        assert_eq!(normalized.personal_note.as_deref(), Some("See you Friday"));
        assert_eq!(normalized.length, Length::Short);
        assert_eq!(normalized.language, "fr");
    }
}
