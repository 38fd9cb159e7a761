use std::sync::Arc;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// One Premier League season's champion, as stored in the data file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct SeasonRecord {
    /// Season identifier, e.g. "2020-2021"
    #[schema(example = "2020-2021")]
    pub season: String,
    pub winner: String,
    pub manager: String,
    pub points: i64,
}

/// Response wrapper for the full listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WinnersResponse {
    pub total_seasons: usize,
    /// Shared with the store, not copied per request
    #[schema(value_type = Vec<SeasonRecord>)]
    pub winners: Arc<[SeasonRecord]>,
}

/// Response wrapper for team lookups
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamWinsResponse {
    pub team: String,
    pub total_wins: usize,
    pub seasons: Vec<SeasonRecord>,
}

/// Response wrapper for manager lookups
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ManagerWinsResponse {
    pub manager: String,
    pub total_wins: usize,
    pub seasons: Vec<SeasonRecord>,
}

/// Points extreme and the season it happened in
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct PointsRecord {
    /// `None` only for the lowest-points sentinel over an empty dataset
    pub points: Option<i64>,
    pub season: String,
}

/// Aggregate statistics over every season
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub total_seasons: usize,
    /// (team, titles), most titles first
    #[schema(value_type = Vec<Vec<Object>>)]
    pub teams_by_wins: Vec<(String, usize)>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub managers_by_wins: Vec<(String, usize)>,
    pub highest_points: PointsRecord,
    pub lowest_points: PointsRecord,
}

/// Static API description served at the root
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
    pub description: String,
    pub endpoints: Vec<String>,
}
