use indexmap::IndexMap;
use tracing::{debug, info, warn};

use super::day_templates::{templates_for, DayKind, DayTemplate};
use super::errors::PlanGenerationError;
use super::exercise_selector::select_exercises;
use super::plan_notes::generate_plan_notes;
use super::special_days::handle_special_day;
use crate::database::{ExerciseCatalog, PlanStore};
use crate::models::{
    weekday_name, ExerciseSummary, GeneratedWorkouts, NewPlanExercise, PlanParameters,
    ScheduledExercise, WEEK,
};

pub const TRAINING_SETS: i32 = 3;
pub const TRAINING_REPS: i32 = 12;

/// Builds the weekly days and exercises of a plan inside the caller's
/// transaction. Holds no state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutPlanGenerator;

impl WorkoutPlanGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Replaces any existing days of `params.plan_id` with a freshly generated week.
    ///
    /// The store is expected to be an open transaction; nothing here commits
    /// or rolls back, so any error leaves the caller to discard the writes.
    pub async fn generate<S>(
        &self,
        store: &mut S,
        params: &PlanParameters,
    ) -> Result<GeneratedWorkouts, PlanGenerationError>
    where
        S: ExerciseCatalog + PlanStore,
    {
        let plan_id = params.plan_id;
        info!(
            "Generating workout plan {} (goal: {}, activity level: {})",
            plan_id, params.fitness_goal, params.activity_level
        );

        if !store.plan_exists(plan_id).await? {
            return Err(PlanGenerationError::PlanNotFound(plan_id));
        }

        let replaced = store.delete_plan_days_and_exercises(plan_id).await?;
        if replaced > 0 {
            debug!("Plan {}: replacing {} existing days", plan_id, replaced);
        }

        let mut scheduled = Vec::new();
        for template in templates_for(params.activity_level) {
            let day_exercises = match template.kind() {
                DayKind::Rest | DayKind::Recovery => {
                    handle_special_day(store, plan_id, template).await?
                }
                DayKind::Training => self.schedule_training_day(store, params, template).await?,
            };
            scheduled.extend(day_exercises);
        }

        let days_created = store.count_plan_days(plan_id).await?;
        if days_created == 0 {
            return Err(PlanGenerationError::GenerationIncomplete(plan_id));
        }
        if days_created != WEEK.len() as i64 {
            warn!("Plan {}: expected 7 days, found {}", plan_id, days_created);
        }

        let notes = generate_plan_notes(
            params.fitness_goal.as_str(),
            params.activity_level.as_str(),
            params.primary_focus.as_deref().unwrap_or(""),
        );

        info!(
            "Generated workout plan {} with {} scheduled exercises",
            plan_id,
            scheduled.len()
        );

        Ok(GeneratedWorkouts {
            workouts: workouts_by_day(&scheduled),
            notes,
        })
    }

    async fn schedule_training_day<S>(
        &self,
        store: &mut S,
        params: &PlanParameters,
        template: &DayTemplate,
    ) -> Result<Vec<ScheduledExercise>, PlanGenerationError>
    where
        S: ExerciseCatalog + PlanStore,
    {
        let exercises =
            select_exercises(store, template, params.fitness_goal, params.activity_level).await?;

        let plan_day_id = store
            .create_plan_day(params.plan_id, template.day, &template.focus())
            .await?;

        let mut scheduled = Vec::with_capacity(exercises.len());
        for (position, exercise) in exercises.into_iter().enumerate() {
            store
                .create_plan_exercise(&NewPlanExercise {
                    plan_day_id,
                    exercise_id: exercise.exercise_id,
                    sets: TRAINING_SETS,
                    reps: TRAINING_REPS,
                    order_index: position as i32 + 1,
                })
                .await?;

            scheduled.push(ScheduledExercise {
                exercise,
                sets: TRAINING_SETS,
                reps: TRAINING_REPS,
                day: template.day,
            });
        }

        Ok(scheduled)
    }
}

/// Weekday name to exercise summaries, one entry for every day of the week, Monday first.
pub fn workouts_by_day(scheduled: &[ScheduledExercise]) -> IndexMap<String, Vec<ExerciseSummary>> {
    WEEK.iter()
        .map(|&day| {
            let summaries = scheduled
                .iter()
                .filter(|s| s.day == day)
                .map(ScheduledExercise::summary)
                .collect();
            (weekday_name(day).to_string(), summaries)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, ExerciseCandidate};
    use chrono::Weekday;

    fn scheduled(id: i32, day: Weekday) -> ScheduledExercise {
        ScheduledExercise {
            exercise: ExerciseCandidate {
                exercise_id: id,
                name: format!("Exercise {id}"),
                difficulty: Difficulty::Intermediate,
                equipment_options: vec!["Barbell".to_string()],
                video_url: Some(format!("https://videos.example.com/{id}")),
                muscle_groups: vec!["Upper Body".to_string()],
                muscles: vec!["Chest".to_string()],
            },
            sets: TRAINING_SETS,
            reps: TRAINING_REPS,
            day,
        }
    }

    #[test]
    fn test_workouts_by_day_lists_every_weekday() {
        let workouts = workouts_by_day(&[
            scheduled(1, Weekday::Mon),
            scheduled(2, Weekday::Mon),
            scheduled(3, Weekday::Thu),
        ]);

        assert_eq!(workouts.len(), 7);
        assert_eq!(workouts["Monday"].len(), 2);
        assert_eq!(workouts["Thursday"][0].id, 3);
        assert!(workouts["Sunday"].is_empty());

        let days: Vec<&str> = workouts.keys().map(String::as_str).collect();
        assert_eq!(
            days,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn test_summary_carries_sets_and_reps() {
        let summary = scheduled(9, Weekday::Fri).summary();
        assert_eq!(summary.sets, 3);
        assert_eq!(summary.reps, 12);
        assert_eq!(summary.muscle_groups, vec!["Upper Body".to_string()]);
    }
}
