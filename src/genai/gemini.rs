use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;

use super::{GenerationResult, TextGenerator};

/// Default Gemini API base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text substituted when the response structure carries no answer.
pub const NO_RESPONSE_SENTINEL: &str = "No response.";

/// Gemini client configuration. The model identifier is configuration, not
/// user input; `api_base` is overridable so tests can point at a local mock.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Holds a single HTTP client, constructed once at startup and shared across
/// requests for the lifetime of the process. Stateless per call, so
/// concurrent use is safe. No client-side timeout is configured; a slow
/// provider call stalls only the request that issued it.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Build a client with a process-wide HTTP connection pool. Fails only if
    /// the TLS backend cannot be initialized.
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_base, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "GOOGLE_API_KEY is not set".to_string(),
            ));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        // An answer that cannot be located in the response structure is not a
        // failure; the sentinel flows down the success path.
        let text = match extract_text(&body) {
            ExtractedText::Found(text) => text,
            ExtractedText::NotFound => NO_RESPONSE_SENTINEL.to_string(),
        };

        Ok(GenerationResult { text })
    }
}

/// Outcome of walking candidates -> content -> parts -> text.
#[derive(Debug, PartialEq, Eq)]
enum ExtractedText {
    Found(String),
    NotFound,
}

/// Navigate the response structure defensively: any absent link in the chain
/// (or an empty text part) yields `NotFound` rather than an error.
fn extract_text(response: &GenerateContentResponse) -> ExtractedText {
    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.as_deref());

    match text {
        Some(text) if !text.is_empty() => ExtractedText::Found(text.to_string()),
        _ => ExtractedText::NotFound,
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn extracts_text_from_well_formed_response() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Machine learning is..."}]
                    },
                    "finishReason": "STOP"
                }]
            }"#,
        );

        assert_eq!(
            extract_text(&response),
            ExtractedText::Found("Machine learning is...".to_string())
        );
    }

    #[test]
    fn missing_candidates_yields_not_found() {
        let response = parse(r#"{"candidates": []}"#);
        assert_eq!(extract_text(&response), ExtractedText::NotFound);

        let response = parse(r#"{}"#);
        assert_eq!(extract_text(&response), ExtractedText::NotFound);
    }

    #[test]
    fn missing_content_yields_not_found() {
        let response = parse(r#"{"candidates": [{"finishReason": "STOP"}]}"#);
        assert_eq!(extract_text(&response), ExtractedText::NotFound);
    }

    #[test]
    fn missing_parts_yields_not_found() {
        let response = parse(r#"{"candidates": [{"content": {"role": "model"}}]}"#);
        assert_eq!(extract_text(&response), ExtractedText::NotFound);
    }

    #[test]
    fn missing_text_yields_not_found() {
        let response = parse(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#);
        assert_eq!(extract_text(&response), ExtractedText::NotFound);
    }

    #[test]
    fn empty_text_yields_not_found() {
        let response = parse(r#"{"candidates": [{"content": {"parts": [{"text": ""}]}}]}"#);
        assert_eq!(extract_text(&response), ExtractedText::NotFound);
    }

    #[test]
    fn api_url_embeds_model_and_key() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: "k".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_base: GEMINI_API_BASE.to_string(),
        })
        .unwrap();

        assert_eq!(
            client.api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=k"
        );
    }

    #[tokio::test]
    async fn missing_api_key_is_not_configured() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            api_base: GEMINI_API_BASE.to_string(),
        })
        .unwrap();

        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
        assert_eq!(err.status(), None);
    }
}
