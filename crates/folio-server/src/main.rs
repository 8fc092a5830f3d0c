use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use folio_gemini::client::GeminiClient;
use folio_server::config::{API_KEY_VAR, CredentialSource, ServerConfig};
use folio_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let grounding = config.load_grounding()?;
    tracing::info!(
        name = grounding.name(),
        projects = grounding.portfolio().projects.len(),
        "grounding document loaded"
    );

    let model = GeminiClient::from_env();
    tracing::info!(model = model.model(), "using Gemini model");

    let credentials = CredentialSource::provider_key();
    if credentials.read().is_none() {
        // Not fatal at startup: the key is read per request and every relay
        // call fails fast until it is set.
        tracing::warn!(
            var = API_KEY_VAR,
            "provider credential is not set; /api/chat will return 500"
        );
    }

    let state = AppState::new(grounding, Arc::new(model), credentials);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "folio server listening");

    axum::serve(listener, folio_server::router(state)).await?;
    Ok(())
}
