//! Persistence seams for the workout planner.
//!
//! Every read and write goes through a unit of work obtained from a
//! [`PlanDatabase`]. The generator only ever sees the store traits, so it can
//! write rows but has no way to commit or roll back the surrounding
//! transaction; that stays with the route handler.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc, Weekday};
use thiserror::Error;

use crate::models::{
    ExerciseCandidate, ExerciseQuery, NewPlanExercise, NewWorkoutPlan, PlanDayDetail, WorkoutPlan,
};

pub use memory::MemoryDatabase;
pub use postgres::PgDatabase;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Read side of the exercise reference data.
#[async_trait]
pub trait ExerciseCatalog: Send {
    /// Exercises matching the tag and difficulty filter, ordered by id, at most `query.limit`.
    async fn find_exercises(
        &mut self,
        query: &ExerciseQuery,
    ) -> Result<Vec<ExerciseCandidate>, DatabaseError>;

    /// Whole catalog, or only exercises tagged with `muscle_group`, ordered by id.
    async fn list_exercises(
        &mut self,
        muscle_group: Option<&str>,
    ) -> Result<Vec<ExerciseCandidate>, DatabaseError>;
}

/// Child rows of a plan: days and their exercises.
#[async_trait]
pub trait PlanStore: Send {
    async fn plan_exists(&mut self, plan_id: i32) -> Result<bool, DatabaseError>;

    async fn create_plan_day(
        &mut self,
        plan_id: i32,
        day_of_week: Weekday,
        focus: &str,
    ) -> Result<i32, DatabaseError>;

    async fn create_plan_exercise(&mut self, exercise: &NewPlanExercise) -> Result<(), DatabaseError>;

    /// Returns the number of day rows removed.
    async fn delete_plan_days_and_exercises(&mut self, plan_id: i32) -> Result<u64, DatabaseError>;

    async fn count_plan_days(&mut self, plan_id: i32) -> Result<i64, DatabaseError>;
}

/// Plan header rows, scoped to their owning user.
#[async_trait]
pub trait PlanHeaderStore: Send {
    async fn latest_plan_created_at(
        &mut self,
        user_id: i32,
    ) -> Result<Option<DateTime<Utc>>, DatabaseError>;

    async fn create_plan(&mut self, plan: &NewWorkoutPlan) -> Result<WorkoutPlan, DatabaseError>;

    async fn update_plan(
        &mut self,
        plan_id: i32,
        plan: &NewWorkoutPlan,
    ) -> Result<Option<WorkoutPlan>, DatabaseError>;

    async fn find_plan(
        &mut self,
        plan_id: i32,
        user_id: i32,
    ) -> Result<Option<WorkoutPlan>, DatabaseError>;

    async fn list_plans(&mut self, user_id: i32) -> Result<Vec<WorkoutPlan>, DatabaseError>;

    async fn plan_days(&mut self, plan_id: i32) -> Result<Vec<PlanDayDetail>, DatabaseError>;

    async fn delete_plan(&mut self, plan_id: i32, user_id: i32) -> Result<bool, DatabaseError>;
}

/// An open transaction. Dropping it without `commit` discards its writes.
#[async_trait]
pub trait UnitOfWork: ExerciseCatalog + PlanStore + PlanHeaderStore + Send {
    async fn commit(self) -> Result<(), DatabaseError>;
    async fn rollback(self) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait PlanDatabase: Clone + Send + Sync + 'static {
    type UnitOfWork: UnitOfWork + 'static;

    async fn begin(&self) -> Result<Self::UnitOfWork, DatabaseError>;
}
