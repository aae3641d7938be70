//! Google Gemini text-generation client
//!
//! Thin wrapper over the Generative Language `generateContent` endpoint.
//! The prompt arrives fully assembled; the reply is returned verbatim as
//! free-form text.

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::GeminiConfig;

/// Request timeout for generation calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini API request body
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
}

/// Gemini API response body (fields we read)
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Gemini text-generation endpoint
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from configuration; None when disabled or keyless
    pub fn from_config(config: &GeminiConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        if config.api_key.is_empty() {
            warn!("Gemini integration enabled but no API key configured");
            return None;
        }

        Some(Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: SecretString::new(config.api_key.clone()),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Construct directly; used by tests to point at a mock server
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_key: SecretString::new(api_key.to_string()),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send a caller-assembled prompt and return the reply text
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: 0.7,
                top_p: 0.9,
            }),
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending Gemini request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini API returned {}: {}", status, body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(anyhow!("Gemini response contained no candidates"));
        }

        Ok(text)
    }

    /// Model this client talks to
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_serialization_uses_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: 0.7,
                top_p: 0.9,
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["topP"], 0.9);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Stay consistent and "}, {"text": "hydrate."}]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key", "gemini-2.5-flash", &server.uri());
        let text = client.generate("give me advice").await.unwrap();
        assert_eq!(text, "Stay consistent and hydrate.");
    }

    #[tokio::test]
    async fn test_generate_surfaces_api_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key", "gemini-2.5-flash", &server.uri());
        let err = client.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key", "gemini-2.5-flash", &server.uri());
        assert!(client.generate("prompt").await.is_err());
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = GeminiConfig {
            enabled: true,
            api_key: String::new(),
            ..Default::default()
        };
        assert!(GeminiClient::from_config(&config).is_none());

        let config = GeminiConfig {
            enabled: true,
            api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(GeminiClient::from_config(&config).is_some());
    }
}
