use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use db::WinnersStore;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Premier League Winners API",
        description = "A simple API to get Premier League winners from 2000 onwards",
        version = "1.0.0"
    ),
    paths(
        routes::info::root,
        routes::health::health_check,
        routes::winners::get_all_winners,
        routes::winners::get_winner_by_season,
        routes::winners::get_wins_by_team,
        routes::winners::get_wins_by_manager,
        routes::stats::get_statistics,
    ),
    components(
        schemas(
            models::SeasonRecord,
            models::WinnersResponse,
            models::TeamWinsResponse,
            models::ManagerWinsResponse,
            models::PointsRecord,
            models::StatsResponse,
            models::InfoResponse,
            routes::health::HealthResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "Winners", description = "Season winner lookups"),
        (name = "Stats", description = "Aggregates across all seasons"),
        (name = "Info", description = "Service information")
    )
)]
pub struct ApiDoc;

/// Build the full API router over an already-loaded record set.
pub fn build_router(store: WinnersStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::info::root))
        .route("/health", get(routes::health::health_check))

        // Winner lookups
        .route("/winners", get(routes::winners::get_all_winners))
        .route("/winners/{season}", get(routes::winners::get_winner_by_season))
        .route("/winners/team/{team_name}", get(routes::winners::get_wins_by_team))
        .route("/winners/manager/{manager_name}", get(routes::winners::get_wins_by_manager))

        // Aggregates
        .route("/stats", get(routes::stats::get_statistics))

        // Docs
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))

        .fallback(routes::info::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(store)
}
