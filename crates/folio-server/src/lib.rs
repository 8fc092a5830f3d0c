//! folio-server
//!
//! HTTP surface of the portfolio: the prompt relay and the read-only
//! portfolio endpoints.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Chat relay
        .route("/api/chat", post(routes::chat::relay_prompt))
        // Portfolio (read-only grounding data)
        .route("/api/projects", get(routes::portfolio::list_projects))
        .route("/api/projects/{slug}", get(routes::portfolio::get_project))
        .route("/api/tech-stack", get(routes::portfolio::tech_stack))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::request_log::request_log)),
        )
        .with_state(state)
}
