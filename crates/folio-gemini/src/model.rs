use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::GeminiError;

/// Sampling temperature used by the relay. Kept low so answers stay close to
/// the grounding data.
pub const RELAY_TEMPERATURE: f32 = 0.2;

/// Text deltas in emission order.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, GeminiError>> + Send>>;

/// A single-turn generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
}

/// A hosted model that streams text.
///
/// The credential is passed per call because the relay reads it from the
/// environment on every request.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn stream_text(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> Result<TextStream, GeminiError>;
}
