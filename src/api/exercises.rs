use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};

use super::errors::ApiError;
use super::state::AppState;
use crate::auth::UserSession;
use crate::database::{ExerciseCatalog, PlanDatabase, UnitOfWork};
use crate::models::{ExerciseCandidate, ExerciseListQuery};

pub fn exercise_routes<D: PlanDatabase>(state: AppState<D>) -> Router {
    Router::new()
        .route("/", get(list_exercises::<D>))
        .with_state(state)
}

/// Browse the exercise catalog, optionally narrowed to one muscle group
pub async fn list_exercises<D: PlanDatabase>(
    State(state): State<AppState<D>>,
    _session: UserSession,
    Query(query): Query<ExerciseListQuery>,
) -> Result<Json<Vec<ExerciseCandidate>>, ApiError> {
    let mut uow = state.db.begin().await?;
    let exercises = uow.list_exercises(query.muscle_group.as_deref()).await?;
    uow.commit().await?;

    Ok(Json(exercises))
}
