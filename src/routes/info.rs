use axum::{http::Uri, response::Json};
use crate::error::ApiError;
use crate::models::InfoResponse;

/// Every route the router serves, advertised at `/`
pub const ENDPOINTS: &[&str] = &[
    "/winners - Get all Premier League winners",
    "/winners/{season} - Get winner for a specific season",
    "/winners/team/{team_name} - Get all wins for a specific team",
    "/winners/manager/{manager_name} - Get all wins for a specific manager",
    "/stats - Get statistics about Premier League winners",
    "/health - Service health and data file status",
    "/docs - Interactive API documentation",
    "/openapi.json - OpenAPI document",
];

// GET / - API information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information and route list", body = InfoResponse)
    ),
    tag = "Info"
)]
pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Welcome to Premier League Winners API".to_string(),
        description: "Get information about Premier League winners from 2000 onwards".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

// Any unmatched path, answered with the usual JSON error body
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
