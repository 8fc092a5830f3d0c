//! `POST /api/chat`: relay a visitor prompt to the model and stream the
//! answer back as plain text.

use std::time::Duration;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, stream};
use tokio::time::Instant;

use folio_core::models::wire::ChatRequest;
use folio_gemini::model::{GenerateRequest, RELAY_TEMPERATURE};
use folio_gemini::prompt::{build_system_prompt, preview};

use crate::error::ApiError;
use crate::state::AppState;

/// Wall-clock ceiling for one relay, headers and body included.
pub const RELAY_MAX_DURATION: Duration = Duration::from_secs(30);

pub const MISSING_KEY_MESSAGE: &str = "Server configuration error: GOOGLE_GENERATIVE_AI_API_KEY \
is missing. Set it in project environment variables.";

const PROMPT_PREVIEW_CHARS: usize = 80;

/// Relay a prompt to the model.
///
/// The response status is decided before any body byte is sent: the handler
/// waits for the first delta, so a provider that fails up front yields a
/// 500 JSON envelope rather than a 200 with a truncated body. Once streaming
/// has started, a provider error aborts the body.
///
/// The credential is checked before the body is decoded.
pub async fn relay_prompt(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let deadline = Instant::now() + state.relay_timeout;

    // A missing key fails every request, whatever its body.
    let Some(api_key) = state.credentials.read() else {
        return Err(ApiError::Config(MISSING_KEY_MESSAGE.to_string()));
    };

    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    tracing::info!(
        received_at = %jiff::Timestamp::now(),
        prompt_preview = %preview(&req.prompt, PROMPT_PREVIEW_CHARS),
        "chat relay request"
    );

    let request = GenerateRequest {
        system: build_system_prompt(&state.grounding),
        prompt: req.prompt,
        temperature: RELAY_TEMPERATURE,
    };

    let mut deltas = tokio::time::timeout_at(deadline, state.model.stream_text(&api_key, &request))
        .await
        .map_err(|_| ApiError::Upstream("model did not respond in time".to_string()))??;

    let first = match tokio::time::timeout_at(deadline, deltas.next()).await {
        Ok(Some(Ok(delta))) => Some(delta),
        Ok(Some(Err(e))) => return Err(e.into()),
        Ok(None) => None,
        Err(_) => {
            return Err(ApiError::Upstream(
                "model did not respond in time".to_string(),
            ));
        }
    };

    let body = stream::iter(first.map(Ok))
        .chain(deltas)
        .inspect(|delta| {
            if let Err(e) = delta {
                tracing::error!(error = %e, "model stream failed mid-response");
            }
        })
        .take_until(async move {
            tokio::time::sleep_until(deadline).await;
            tracing::warn!("relay deadline reached, closing stream");
        });

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(body),
    )
        .into_response())
}
