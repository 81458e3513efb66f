//! OpenRouter API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::constants::GENERATION_ENDPOINT;
use crate::draft::GenerationParams;
use crate::error::GenerationFailure;

/// OpenRouter client for chat completions.
///
/// Holds the resolved credential; whether the service is configured is
/// decided once, at construction, never re-checked ad hoc downstream.
#[derive(Clone)]
pub struct GenClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl GenClient {
    /// Create a new client from config and a pre-resolved credential.
    ///
    /// `api_key` must already have been through credential resolution;
    /// `None` means the service is unconfigured and no request will ever
    /// leave this client.
    pub fn new(config: &GenerationConfig, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// True when a usable credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send a single chat completion request, bounded by the configured
    /// timeout. At most one call to the service is made; there is no
    /// retry, the caller's fallback path covers repeated failures.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_content: &str,
        params: GenerationParams,
    ) -> Result<String, GenerationFailure> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerationFailure::Unconfigured);
        };

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user_content.to_string(),
                },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        // The timeout covers the whole exchange, body included, so a slow
        // service can never stall the caller past the deadline.
        let call = async {
            let response = self
                .client
                .post(GENERATION_ENDPOINT)
                .header("Authorization", format!("Bearer {}", api_key))
                .header("Content-Type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|e| {
                    tracing::warn!("Generation request failed to send: {}", e);
                    GenerationFailure::Transport
                })?;

            let status = response.status();
            if !status.is_success() {
                let error_text = response.text().await.unwrap_or_default();
                tracing::warn!("Generation service error ({}): {}", status, error_text);
                return Err(GenerationFailure::Transport);
            }

            let chat_response: ChatResponse = response.json().await.map_err(|e| {
                tracing::warn!("Failed to parse generation response: {}", e);
                GenerationFailure::MalformedResponse
            })?;

            chat_response
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or(GenerationFailure::MalformedResponse)
        };

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Generation request timed out after {:?}", self.timeout);
                Err(GenerationFailure::Timeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GenerationParams {
        GenerationParams {
            temperature: 0.8,
            max_tokens: 256,
        }
    }

    #[tokio::test]
    async fn test_unconfigured_short_circuits_without_network() {
        let client = GenClient::new(&GenerationConfig::default(), None);
        assert!(!client.is_configured());

        let result = client.complete("system", "user", params()).await;
        assert_eq!(result, Err(GenerationFailure::Unconfigured));
    }

    #[tokio::test]
    async fn test_configured_client_reports_configured() {
        let client = GenClient::new(
            &GenerationConfig::default(),
            Some("sk-or-v1-abc123".to_string()),
        );
        assert!(client.is_configured());
    }
}
