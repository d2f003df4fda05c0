use rand::seq::SliceRandom;
use tracing::debug;

use super::day_templates::{DayKind, DayTemplate, RECOVERY, REST};
use super::errors::PlanGenerationError;
use super::exercise_selector::MAX_EXERCISES_PER_DAY;
use crate::database::{ExerciseCatalog, PlanStore};
use crate::models::{NewPlanExercise, ScheduledExercise};

pub const RECOVERY_SETS: i32 = 2;
pub const RECOVERY_REPS: i32 = 12;

/// Persists a Rest or Recovery day. Training days are left to the caller and
/// produce no writes here.
pub async fn handle_special_day<S>(
    store: &mut S,
    plan_id: i32,
    template: &DayTemplate,
) -> Result<Vec<ScheduledExercise>, PlanGenerationError>
where
    S: ExerciseCatalog + PlanStore,
{
    match template.kind() {
        DayKind::Training => Ok(Vec::new()),
        DayKind::Rest => {
            store.create_plan_day(plan_id, template.day, REST).await?;
            debug!("Plan {}: {:?} is a rest day", plan_id, template.day);
            Ok(Vec::new())
        }
        DayKind::Recovery => {
            let plan_day_id = store.create_plan_day(plan_id, template.day, RECOVERY).await?;

            let mut candidates = store
                .list_exercises(Some(RECOVERY))
                .await
                .map_err(PlanGenerationError::CatalogQueryFailed)?;
            candidates.shuffle(&mut rand::thread_rng());
            candidates.truncate(MAX_EXERCISES_PER_DAY);

            let mut scheduled = Vec::with_capacity(candidates.len());
            for (position, exercise) in candidates.into_iter().enumerate() {
                store
                    .create_plan_exercise(&NewPlanExercise {
                        plan_day_id,
                        exercise_id: exercise.exercise_id,
                        sets: RECOVERY_SETS,
                        reps: RECOVERY_REPS,
                        order_index: position as i32 + 1,
                    })
                    .await?;

                scheduled.push(ScheduledExercise {
                    exercise,
                    sets: RECOVERY_SETS,
                    reps: RECOVERY_REPS,
                    day: template.day,
                });
            }

            debug!(
                "Plan {}: {:?} recovery day with {} exercises",
                plan_id,
                template.day,
                scheduled.len()
            );
            Ok(scheduled)
        }
    }
}
