use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::exercises::exercise_routes;
use super::health::health_check;
use super::state::AppState;
use super::workout_plans::workout_plan_routes;
use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::database::PlanDatabase;

/// CORS for the single-page frontend
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_routes<D: PlanDatabase>(db: D, config: &AppConfig) -> Router {
    let state = AppState::new(db, JwtService::new(&config.jwt_secret), config.plan_debounce);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/workouts/plans", workout_plan_routes(state.clone()))
        .nest("/api/exercises", exercise_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
