//! Gemini `streamGenerateContent` client.
//!
//! Requests are sent with `alt=sse`, so the body is a Server-Sent Events
//! stream whose `data:` payloads are `GenerateContentResponse` JSON objects.
//! Each event is reduced to the text of its first candidate; events that
//! carry no text (usage-only trailers, safety metadata) are skipped.

use std::time::Duration;

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GeminiError;
use crate::model::{GenerateRequest, TextModel, TextStream};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: ApiContent<'a>,
    contents: Vec<ApiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct ApiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<ApiPart<'a>>,
}

#[derive(Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ── Client ───────────────────────────────────────────────────────────────────

/// HTTP client for the Gemini API.
///
/// Configuration comes from the environment with hosted defaults:
///
/// | Variable          | Default                                     |
/// |-------------------|---------------------------------------------|
/// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
/// | `FOLIO_MODEL`     | `gemini-3-flash-preview`                    |
///
/// The API key is not part of the client; it is supplied on every call.
pub struct GeminiClient {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let model: String = model.into();
        let base: String = base_url.into();
        let url = format!(
            "{}/v1beta/models/{model}:streamGenerateContent?alt=sse",
            base.trim_end_matches('/')
        );
        Self {
            // No overall timeout: the body is a long-lived stream and the
            // relay enforces its own deadline.
            client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            url,
            model,
        }
    }

    pub fn from_env() -> Self {
        let base =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("FOLIO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(model, base)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn stream_text(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> Result<TextStream, GeminiError> {
        let body = ApiRequest {
            system_instruction: ApiContent {
                role: None,
                parts: vec![ApiPart {
                    text: &request.system,
                }],
            },
            contents: vec![ApiContent {
                role: Some("user"),
                parts: vec![ApiPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        debug!(model = %self.model, "opening Gemini stream");

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::Invocation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, "failed to read Gemini error body");
                    String::new()
                }
            };
            warn!(%status, "Gemini API returned an error status");
            let message =
                provider_message(&body).unwrap_or_else(|| format!("Gemini API returned {status}"));
            return Err(GeminiError::Provider(message));
        }

        let deltas = response
            .bytes_stream()
            .eventsource()
            .filter_map(|event| async move {
                match event {
                    Ok(event) => parse_event(&event.data).transpose(),
                    Err(e) => Some(Err(GeminiError::Stream(e.to_string()))),
                }
            });

        Ok(Box::pin(deltas))
    }
}

/// Extract `error.message` from a Gemini error body.
fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
}

/// Reduce one SSE payload to its text delta. `Ok(None)` means the event
/// carried no text.
fn parse_event(data: &str) -> Result<Option<String>, GeminiError> {
    let data = data.trim();
    if data.is_empty() {
        return Ok(None);
    }

    let chunk: StreamChunk = serde_json::from_str(data)
        .map_err(|e| GeminiError::ResponseParse(format!("{e}: {data}")))?;

    if let Some(error) = chunk.error {
        return Err(GeminiError::Provider(error.message));
    }

    let text: String = chunk
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    Ok((!text.is_empty()).then_some(text))
}
