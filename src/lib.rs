use axum::Router;
use tower_http::cors::CorsLayer;

pub mod modules;
pub mod services;

use services::llm::LlmClient;
use services::transcript::TranscriptClient;

#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub transcripts: TranscriptClient,
}

/// Assembles the full application router with CORS applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(modules::health::routes::routes())
        .merge(modules::summarize::routes::routes())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
