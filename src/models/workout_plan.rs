use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use indexmap::IndexMap;

use super::exercise::{ExerciseCandidate, ExerciseSummary};
use super::taxonomy::{weekday_name, ActivityLevel, Difficulty, FitnessGoal};

/// Plan header row. Owned by the route layer; the generator only touches its children.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutPlan {
    pub plan_id: i32,
    pub user_id: i32,
    pub plan_name: String,
    pub fitness_goal: String,
    pub activity_level: String,
    pub primary_focus: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWorkoutPlan {
    pub user_id: i32,
    pub plan_name: String,
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub primary_focus: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlanDay {
    pub plan_day_id: i32,
    pub plan_id: i32,
    pub day_of_week: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanExercise {
    pub plan_day_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlanExerciseDetail {
    pub plan_day_id: i32,
    pub exercise_id: i32,
    pub name: String,
    pub difficulty: Difficulty,
    pub sets: i32,
    pub reps: i32,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDayDetail {
    pub plan_day_id: i32,
    pub day_of_week: String,
    pub focus: String,
    pub exercises: Vec<PlanExerciseDetail>,
}

/// An exercise placed on a day of the plan, accumulated while the week is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledExercise {
    pub exercise: ExerciseCandidate,
    pub sets: i32,
    pub reps: i32,
    pub day: Weekday,
}

impl ScheduledExercise {
    pub fn summary(&self) -> ExerciseSummary {
        ExerciseSummary {
            id: self.exercise.exercise_id,
            name: self.exercise.name.clone(),
            sets: self.sets,
            reps: self.reps,
            difficulty: self.exercise.difficulty,
            equipment_options: self.exercise.equipment_options.clone(),
            muscle_groups: self.exercise.muscle_groups.clone(),
        }
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day)
    }
}

/// Inputs to one generation run for an existing plan header.
#[derive(Debug, Clone)]
pub struct PlanParameters {
    pub plan_id: i32,
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub primary_focus: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedWorkouts {
    pub workouts: IndexMap<String, Vec<ExerciseSummary>>,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    pub fitness_goal: String,
    pub activity_level: String,
    pub primary_focus: Option<String>,
    pub plan_name: Option<String>,
    pub plan_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanResponse {
    pub workout_plan_id: i32,
    pub workouts: IndexMap<String, Vec<ExerciseSummary>>,
    pub plan_name: String,
    pub plan_notes: String,
}

#[derive(Debug, Serialize)]
pub struct WorkoutPlanDetail {
    pub plan: WorkoutPlan,
    pub days: Vec<PlanDayDetail>,
}
