use axum::{extract::State, response::Json};
use crate::db::{self, WinnersStore};
use crate::error::{ApiError, ErrorResponse};
use crate::models::StatsResponse;

// GET /stats - Title counts and points extremes across all seasons
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Aggregate statistics", body = StatsResponse),
        (status = 500, description = "Data file missing or invalid", body = ErrorResponse)
    ),
    tag = "Stats"
)]
pub async fn get_statistics(
    State(store): State<WinnersStore>,
) -> Result<Json<StatsResponse>, ApiError> {
    let records = store.records()?;

    Ok(Json(db::compute_stats(records)))
}
