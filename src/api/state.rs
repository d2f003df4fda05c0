use axum::extract::FromRef;
use std::time::Duration;

use crate::auth::JwtService;
use crate::services::WorkoutPlanGenerator;

#[derive(Clone)]
pub struct AppState<D> {
    pub db: D,
    pub jwt_service: JwtService,
    pub generator: WorkoutPlanGenerator,
    pub plan_debounce: Duration, // minimum gap between two plan creations by one user
}

impl<D> AppState<D> {
    pub fn new(db: D, jwt_service: JwtService, plan_debounce: Duration) -> Self {
        Self {
            db,
            jwt_service,
            generator: WorkoutPlanGenerator::new(),
            plan_debounce,
        }
    }
}

impl<D> FromRef<AppState<D>> for JwtService {
    fn from_ref(state: &AppState<D>) -> Self {
        state.jwt_service.clone()
    }
}
