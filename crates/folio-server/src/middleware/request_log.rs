use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tokio::time::Instant;

/// Emits one `api_request` event per call once the response head is ready.
///
/// For `/api/chat` that is when the first delta arrived, so `latency_ms` is
/// time-to-first-token and the body may still be streaming.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), latency_ms, "api_request");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), latency_ms, "api_request");
    }

    response
}
