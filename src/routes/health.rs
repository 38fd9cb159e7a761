use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;
use crate::db::WinnersStore;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    /// Whether the winners data file loaded at startup
    data_loaded: bool,
    timestamp: i64,
}

// GET /health - Liveness probe; stays 200 even when the data file is bad
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Info"
)]
pub async fn health_check(
    State(store): State<WinnersStore>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        data_loaded: store.records().is_ok(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
