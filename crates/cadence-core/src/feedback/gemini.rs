//! Google Generative Language API client.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::TextGenerator;
use crate::error::{CadenceError, FeedbackResultExt, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; requests fail without one
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-3-flash-preview`
    pub model: String,
    /// Scheme and host of the API
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CadenceError::feedback_service("response contained no text"));
        }
        Ok(text)
    }
}

/// Text generator backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| CadenceError::Configuration {
                message: "no API key configured for the feedback service".to_string(),
            })?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Requesting feedback from model {}", self.config.model);
        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .feedback_context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CadenceError::feedback_service(format!(
                "API error ({status}): {body}"
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .feedback_context("Failed to parse response")?
            .into_text()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_endpoint_format() {
        let config = GeminiConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let config = GeminiConfig::default().with_api_key(Some("  ".to_string()));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "1. ✅ " }, { "text": "达标" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 42 }
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "1. ✅ 达标");
    }

    #[test]
    fn test_empty_response_is_an_error() {
        for body in [json!({}), json!({ "candidates": [{ "finishReason": "SAFETY" }] })] {
            let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
            assert!(matches!(
                response.into_text(),
                Err(CadenceError::FeedbackService { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_sending() {
        let client = GeminiClient::new(GeminiConfig::default());
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(CadenceError::Configuration { .. })));
    }
}
