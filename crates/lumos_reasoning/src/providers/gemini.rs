//! Gemini REST provider for text generation and image understanding.

use crate::llm::{GenerationParams, TextGenerator};
use crate::retry::{with_retry, RetryConfig};
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use lumos_core::config::LlmConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Build a client from config. Fails when no credentials are present —
    /// callers are expected to fall back to the mock provider instead.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .context("No Gemini API key configured (GOOGLE_API_KEY / GEMINI_API_KEY)")?;
        Ok(Self::new(api_key, &config.model, config.base_url.as_deref()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request(&self, body: &GenerateRequest) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let retry_config = RetryConfig::default();
        let client = &self.client;
        let api_key = &self.api_key;

        let response = with_retry(&retry_config, "Gemini", || async {
            let resp = client
                .post(&url)
                .header("x-goog-api-key", api_key)
                .json(body)
                .send()
                .await
                .context("Failed to send request to Gemini")?;
            Ok(resp)
        })
        .await?;

        let resp_text = response.text().await?;
        tracing::debug!(
            "Gemini raw response (first 2000 chars): {}",
            &resp_text[..resp_text.len().min(2000)]
        );
        let parsed: GenerateResponse =
            serde_json::from_str(&resp_text).context("Failed to parse Gemini response")?;
        Ok(parsed.text())
    }

    /// Plain text-in/text-out completion.
    pub async fn complete_text(&self, prompt: &str, params: GenerationParams) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_tokens,
            },
        };
        self.request(&body).await
    }

    /// Completion over an inline image plus an instruction.
    pub async fn complete_with_image(
        &self,
        prompt: &str,
        image: &[u8],
        params: GenerationParams,
    ) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: "image/jpeg".to_string(),
                            data: BASE64.encode(image),
                        },
                    },
                    Part::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_tokens,
            },
        };
        self.request(&body).await
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    #[tracing::instrument(skip(self, prompt, params), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String> {
        tracing::debug!(
            "LLM params: max_tokens={}, temperature={:.2}",
            params.max_tokens,
            params.temperature
        );
        self.complete_text(prompt, params).await
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

#[derive(Debug, Serialize)]
struct Blob {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts. Empty when the
    /// model returned nothing usable.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Hello "}, {"text": "there"}]},
                "finishReason": "STOP"
            }]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), "Hello there");
    }

    #[test]
    fn test_empty_candidates_yield_empty_text() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), "");
    }

    #[test]
    fn test_request_serialization_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![Part::Text {
                    text: "hi".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                max_output_tokens: 300,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 300);
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = LlmConfig::default();
        assert!(GeminiClient::from_config(&config).is_err());
    }
}
