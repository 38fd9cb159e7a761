use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::db::{self, WinnersStore};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{ManagerWinsResponse, SeasonRecord, TeamWinsResponse, WinnersResponse};

// GET /winners - List every season in source order
#[utoipa::path(
    get,
    path = "/winners",
    responses(
        (status = 200, description = "All seasons in source order", body = WinnersResponse),
        (status = 500, description = "Data file missing or invalid", body = ErrorResponse)
    ),
    tag = "Winners"
)]
pub async fn get_all_winners(
    State(store): State<WinnersStore>,
) -> Result<Json<WinnersResponse>, ApiError> {
    let winners = store.shared()?;

    Ok(Json(WinnersResponse {
        total_seasons: winners.len(),
        winners,
    }))
}

// GET /winners/{season} - Winner for one season, e.g. 2020-2021
#[utoipa::path(
    get,
    path = "/winners/{season}",
    params(
        ("season" = String, Path, description = "Season identifier, matched exactly", example = "2020-2021")
    ),
    responses(
        (status = 200, description = "Winner for the season", body = SeasonRecord),
        (status = 404, description = "No such season", body = ErrorResponse),
        (status = 500, description = "Data file missing or invalid", body = ErrorResponse)
    ),
    tag = "Winners"
)]
pub async fn get_winner_by_season(
    State(store): State<WinnersStore>,
    Path(season): Path<String>,
) -> Result<Json<SeasonRecord>, ApiError> {
    let records = store.records()?;

    let winner = db::get_winner_by_season(records, &season)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("No data found for season {}", season)))?;

    Ok(Json(winner))
}

// GET /winners/team/{team_name} - Every title for a team (exact name, any case)
#[utoipa::path(
    get,
    path = "/winners/team/{team_name}",
    params(
        ("team_name" = String, Path, description = "Full team name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Titles won by the team", body = TeamWinsResponse),
        (status = 404, description = "Team never won", body = ErrorResponse),
        (status = 500, description = "Data file missing or invalid", body = ErrorResponse)
    ),
    tag = "Winners"
)]
pub async fn get_wins_by_team(
    State(store): State<WinnersStore>,
    Path(team_name): Path<String>,
) -> Result<Json<TeamWinsResponse>, ApiError> {
    let seasons = db::get_wins_by_team(store.records()?, &team_name);

    if seasons.is_empty() {
        return Err(ApiError::NotFound(format!("No wins found for team {}", team_name)));
    }

    Ok(Json(TeamWinsResponse {
        team: team_name,
        total_wins: seasons.len(),
        seasons,
    }))
}

// GET /winners/manager/{manager_name} - Every title for a manager (partial name, any case)
#[utoipa::path(
    get,
    path = "/winners/manager/{manager_name}",
    params(
        ("manager_name" = String, Path, description = "Any part of the manager's name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Titles won by matching managers", body = ManagerWinsResponse),
        (status = 404, description = "No matching manager", body = ErrorResponse),
        (status = 500, description = "Data file missing or invalid", body = ErrorResponse)
    ),
    tag = "Winners"
)]
pub async fn get_wins_by_manager(
    State(store): State<WinnersStore>,
    Path(manager_name): Path<String>,
) -> Result<Json<ManagerWinsResponse>, ApiError> {
    let seasons = db::get_wins_by_manager(store.records()?, &manager_name);

    if seasons.is_empty() {
        return Err(ApiError::NotFound(format!("No wins found for manager {}", manager_name)));
    }

    Ok(Json(ManagerWinsResponse {
        manager: manager_name,
        total_wins: seasons.len(),
        seasons,
    }))
}
