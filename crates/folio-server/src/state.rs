use std::sync::Arc;
use std::time::Duration;

use folio_core::models::portfolio::GroundingDocument;
use folio_gemini::model::TextModel;

use crate::config::CredentialSource;
use crate::routes::chat::RELAY_MAX_DURATION;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Everything here is read-only after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub grounding: Arc<GroundingDocument>,
    pub model: Arc<dyn TextModel>,
    pub credentials: CredentialSource,
    pub relay_timeout: Duration,
}

impl AppState {
    pub fn new(
        grounding: GroundingDocument,
        model: Arc<dyn TextModel>,
        credentials: CredentialSource,
    ) -> Self {
        Self {
            grounding: Arc::new(grounding),
            model,
            credentials,
            relay_timeout: RELAY_MAX_DURATION,
        }
    }

    pub fn with_relay_timeout(mut self, timeout: Duration) -> Self {
        self.relay_timeout = timeout;
        self
    }
}
