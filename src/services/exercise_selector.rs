//! Rule-based exercise selection for a single training day.

use tracing::{debug, warn};

use super::day_templates::DayTemplate;
use super::errors::PlanGenerationError;
use crate::database::ExerciseCatalog;
use crate::models::{
    sedentary_fallback, ActivityLevel, Difficulty, ExerciseCandidate, ExerciseQuery, FitnessGoal,
};

pub const MAX_EXERCISES_PER_DAY: usize = 4;

const EASY_TO_MODERATE: &[Difficulty] = &[Difficulty::Beginner, Difficulty::Intermediate];
const MODERATE_TO_HARD: &[Difficulty] = &[Difficulty::Intermediate, Difficulty::Advanced];

/// Difficulty band implied by the goal, `None` when the goal doesn't restrict it.
pub fn goal_difficulties(goal: FitnessGoal) -> Option<&'static [Difficulty]> {
    match goal {
        FitnessGoal::WeightLoss => Some(EASY_TO_MODERATE),
        FitnessGoal::MuscleGain => Some(MODERATE_TO_HARD),
        FitnessGoal::Maintenance | FitnessGoal::Endurance | FitnessGoal::GeneralFitness => None,
    }
}

/// Difficulty band implied by the activity level. Sedentary and extremely
/// active fall through without a restriction.
pub fn activity_difficulties(level: ActivityLevel) -> Option<&'static [Difficulty]> {
    match level {
        ActivityLevel::ModeratelyActive | ActivityLevel::LightlyActive => Some(EASY_TO_MODERATE),
        ActivityLevel::VeryActive | ActivityLevel::Sedentary | ActivityLevel::ExtremelyActive => None,
    }
}

/// Intersection of the goal and activity bands.
pub fn allowed_difficulties(goal: FitnessGoal, level: ActivityLevel) -> Option<Vec<Difficulty>> {
    match (goal_difficulties(goal), activity_difficulties(level)) {
        (None, None) => None,
        (Some(band), None) | (None, Some(band)) => Some(band.to_vec()),
        (Some(by_goal), Some(by_level)) => Some(
            by_goal
                .iter()
                .copied()
                .filter(|d| by_level.contains(d))
                .collect(),
        ),
    }
}

pub fn catalog_query(template: &DayTemplate, goal: FitnessGoal, level: ActivityLevel) -> ExerciseQuery {
    ExerciseQuery {
        muscle_groups_or_muscles: template.muscle_groups.iter().map(|g| g.to_string()).collect(),
        specific_muscles: template.specific_muscles.iter().map(|m| m.to_string()).collect(),
        difficulties: allowed_difficulties(goal, level),
        limit: MAX_EXERCISES_PER_DAY,
    }
}

pub async fn select_exercises<C>(
    catalog: &mut C,
    template: &DayTemplate,
    goal: FitnessGoal,
    level: ActivityLevel,
) -> Result<Vec<ExerciseCandidate>, PlanGenerationError>
where
    C: ExerciseCatalog,
{
    let query = catalog_query(template, goal, level);

    let mut exercises = catalog
        .find_exercises(&query)
        .await
        .map_err(PlanGenerationError::CatalogQueryFailed)?;
    exercises.truncate(MAX_EXERCISES_PER_DAY);

    debug!(
        "Selected {} exercises for {:?} ({} / {})",
        exercises.len(),
        template.day,
        goal,
        level
    );

    // Only sedentary users get the fallback; every other level keeps an empty day.
    if exercises.is_empty() && level == ActivityLevel::Sedentary {
        warn!("No catalog match for {:?}, using bodyweight fallback", template.day);
        return Ok(sedentary_fallback());
    }

    Ok(exercises)
}
