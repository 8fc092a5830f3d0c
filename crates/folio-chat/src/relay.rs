//! HTTP client for the relay endpoint.
//!
//! `POST /api/chat` answers with a raw `text/plain` body. Chunk boundaries
//! are arbitrary, so the body is decoded incrementally: bytes of a
//! multi-byte character split across two chunks are held back until the
//! rest arrives.

use std::fmt::Display;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::{Stream, StreamExt, stream};
use tracing::debug;

use folio_core::models::portfolio::Project;
use folio_core::models::wire::{ChatRequest, ErrorBody, ProjectEntry};

use crate::error::RelayError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, RelayError>> + Send>>;

/// Opens one streamed completion for a prompt.
#[async_trait]
pub trait PromptRelay: Send + Sync {
    async fn open(&self, prompt: &str) -> Result<ChunkStream, RelayError>;
}

pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_projects(&self) -> Result<Vec<ProjectEntry>, RelayError> {
        self.get_json(&format!("{}/api/projects", self.endpoint))
            .await
    }

    pub async fn fetch_project(&self, slug: &str) -> Result<Project, RelayError> {
        self.get_json(&format!("{}/api/projects/{slug}", self.endpoint))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RelayError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;
        let response = check_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Stream(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| RelayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PromptRelay for RelayClient {
    async fn open(&self, prompt: &str) -> Result<ChunkStream, RelayError> {
        debug!(endpoint = %self.endpoint, "opening relay stream");

        let response = self
            .client
            .post(format!("{}/api/chat", self.endpoint))
            .json(&ChatRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;
        let response = check_status(response).await?;

        Ok(decode_utf8(response.bytes_stream()))
    }
}

/// Pass 2xx responses through; turn anything else into
/// [`RelayError::Status`] carrying the server's `error` field when the body
/// is a JSON error envelope.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RelayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, %status, "failed to read error body");
            String::new()
        }
    };
    Err(status_error(status.as_u16(), &body))
}

pub fn status_error(status: u16, body: &str) -> RelayError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));
    RelayError::Status { status, message }
}

// ── UTF-8 reassembly ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `bytes` and return every complete character decoded so far. An
    /// incomplete sequence at the end stays buffered.
    pub fn push(&mut self, bytes: &[u8]) -> Result<String, RelayError> {
        self.pending.extend_from_slice(bytes);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) if e.error_len().is_some() => {
                return Err(RelayError::Decode(e.to_string()));
            }
            Err(e) => e.valid_up_to(),
        };

        let tail = self.pending.split_off(valid);
        let done = std::mem::replace(&mut self.pending, tail);
        String::from_utf8(done).map_err(|e| RelayError::Decode(e.to_string()))
    }

    /// Fails when the body ended in the middle of a character.
    pub fn finish(&mut self) -> Result<(), RelayError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            let n = self.pending.len();
            self.pending.clear();
            Err(RelayError::Decode(format!(
                "body ended with {n} byte(s) of an incomplete character"
            )))
        }
    }
}

/// Decode a byte stream into text chunks. Empty chunks are skipped and the
/// stream ends after the first error.
pub fn decode_utf8<S, B, E>(body: S) -> ChunkStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
{
    let state = (Box::pin(body), Utf8Decoder::new(), false);

    Box::pin(stream::unfold(
        state,
        |(mut body, mut decoder, done)| async move {
            if done {
                return None;
            }
            loop {
                let item = match body.next().await {
                    Some(Ok(bytes)) => match decoder.push(bytes.as_ref()) {
                        Ok(text) if text.is_empty() => continue,
                        Ok(text) => Ok(text),
                        Err(e) => Err(e),
                    },
                    Some(Err(e)) => Err(RelayError::Stream(e.to_string())),
                    None => match decoder.finish() {
                        Ok(()) => return None,
                        Err(e) => Err(e),
                    },
                };
                let done = item.is_err();
                return Some((item, (body, decoder, done)));
            }
        },
    ))
}
