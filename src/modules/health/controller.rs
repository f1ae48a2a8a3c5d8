use axum::Json;

use crate::modules::health::schema::HealthResponse;

/// Liveness probe; answers without touching any external collaborator.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
