//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps a single non-streaming completion call using [`reqwest`].

use std::time::Duration;

use serde::Deserialize;

use crate::config::GeminiConfig;

/// HTTP client for the Gemini API.
pub struct GeminiApi {
    client: reqwest::Client,
    config: GeminiConfig,
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiApiError {
    /// No API key configured; no request was sent.
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no text in its first candidate.
    #[error("Gemini returned no text")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiApi {
    /// Create a client with the configured request timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Request a single completion for `prompt` and return its text.
    ///
    /// Sends `POST {base_url}/v1beta/models/{model}:generateContent`. The
    /// text parts of the first candidate are concatenated unmodified.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiApiError> {
        if self.config.api_key.is_empty() {
            return Err(GeminiApiError::MissingApiKey);
        }

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(self.endpoint_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        extract_text(parsed)
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiApiError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GeminiApiError::EmptyResponse);
    }
    Ok(text)
}
