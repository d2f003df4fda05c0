use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{info, warn};

use super::errors::ApiError;
use super::state::AppState;
use crate::auth::UserSession;
use crate::database::{PlanDatabase, PlanHeaderStore, UnitOfWork};
use crate::models::{
    ActivityLevel, FitnessGoal, GeneratePlanRequest, GeneratePlanResponse, NewWorkoutPlan,
    PlanParameters, WorkoutPlan, WorkoutPlanDetail,
};
use crate::services::PlanGenerationError;

pub const PLEASE_WAIT_MESSAGE: &str = "Please wait a few seconds before generating another plan.";

pub fn workout_plan_routes<D: PlanDatabase>(state: AppState<D>) -> Router {
    Router::new()
        .route("/", get(list_plans::<D>))
        .route("/generate", post(generate_plan::<D>))
        .route("/:plan_id", get(get_plan::<D>).delete(delete_plan::<D>))
        .with_state(state)
}

/// True when a plan created at `last_created` still blocks a new generation at `now`.
pub fn within_debounce(last_created: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    chrono::Duration::from_std(window).map_or(false, |window| now - last_created < window)
}

/// Generate (or regenerate, when `plan_id` is given) a weekly workout plan
pub async fn generate_plan<D: PlanDatabase>(
    State(state): State<AppState<D>>,
    session: UserSession,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<Json<GeneratePlanResponse>, ApiError> {
    let Json(request) = payload?;
    let fitness_goal: FitnessGoal = request
        .fitness_goal
        .parse()
        .map_err(PlanGenerationError::from)?;
    let activity_level: ActivityLevel = request
        .activity_level
        .parse()
        .map_err(PlanGenerationError::from)?;

    let header = NewWorkoutPlan {
        user_id: session.user_id,
        plan_name: request
            .plan_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("{} Plan", fitness_goal.label())),
        fitness_goal,
        activity_level,
        primary_focus: request.primary_focus.filter(|focus| !focus.trim().is_empty()),
    };

    let mut uow = state.db.begin().await?;
    match build_plan(&state, &mut uow, header, request.plan_id).await {
        Ok(response) => {
            uow.commit().await?;
            Ok(Json(response))
        }
        Err(err) => {
            if let Err(rollback_err) = uow.rollback().await {
                warn!("Rollback after failed generation also failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}

async fn build_plan<D: PlanDatabase>(
    state: &AppState<D>,
    uow: &mut D::UnitOfWork,
    header: NewWorkoutPlan,
    plan_id: Option<i32>,
) -> Result<GeneratePlanResponse, ApiError> {
    // Advisory only: two requests racing past this read can both create a plan.
    if let Some(last_created) = uow.latest_plan_created_at(header.user_id).await? {
        if within_debounce(last_created, Utc::now(), state.plan_debounce) {
            return Err(ApiError::TooManyRequests(PLEASE_WAIT_MESSAGE.to_string()));
        }
    }

    let plan = match plan_id {
        Some(plan_id) => uow
            .update_plan(plan_id, &header)
            .await?
            .ok_or(PlanGenerationError::PlanNotFound(plan_id))?,
        None => uow.create_plan(&header).await?,
    };

    let params = PlanParameters {
        plan_id: plan.plan_id,
        fitness_goal: header.fitness_goal,
        activity_level: header.activity_level,
        primary_focus: header.primary_focus,
    };
    let generated = state.generator.generate(uow, &params).await?;

    info!("User {} generated workout plan {}", header.user_id, plan.plan_id);

    Ok(GeneratePlanResponse {
        workout_plan_id: plan.plan_id,
        workouts: generated.workouts,
        plan_name: plan.plan_name,
        plan_notes: generated.notes,
    })
}

/// Get all workout plans of the authenticated user, newest first
pub async fn list_plans<D: PlanDatabase>(
    State(state): State<AppState<D>>,
    session: UserSession,
) -> Result<Json<Vec<WorkoutPlan>>, ApiError> {
    let mut uow = state.db.begin().await?;
    let plans = uow.list_plans(session.user_id).await?;
    uow.commit().await?;

    Ok(Json(plans))
}

/// Get a workout plan with its days and exercises
pub async fn get_plan<D: PlanDatabase>(
    State(state): State<AppState<D>>,
    session: UserSession,
    Path(plan_id): Path<i32>,
) -> Result<Json<WorkoutPlanDetail>, ApiError> {
    let mut uow = state.db.begin().await?;

    let plan = uow
        .find_plan(plan_id, session.user_id)
        .await?
        .ok_or(PlanGenerationError::PlanNotFound(plan_id))?;
    let days = uow.plan_days(plan_id).await?;
    uow.commit().await?;

    Ok(Json(WorkoutPlanDetail { plan, days }))
}

/// Delete a workout plan and everything generated for it
pub async fn delete_plan<D: PlanDatabase>(
    State(state): State<AppState<D>>,
    session: UserSession,
    Path(plan_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut uow = state.db.begin().await?;

    if !uow.delete_plan(plan_id, session.user_id).await? {
        uow.rollback().await?;
        return Err(PlanGenerationError::PlanNotFound(plan_id).into());
    }
    uow.commit().await?;

    info!("User {} deleted workout plan {}", session.user_id, plan_id);
    Ok(StatusCode::NO_CONTENT)
}
