mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use common::{full_catalog, recovery_ids};
use workout_planner::database::{MemoryDatabase, PlanDatabase, PlanHeaderStore, UnitOfWork};
use workout_planner::models::{
    ActivityLevel, FitnessGoal, GeneratedWorkouts, NewWorkoutPlan, PlanParameters,
};
use workout_planner::services::{plan_notes, PlanGenerationError, WorkoutPlanGenerator};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

async fn create_plan(db: &MemoryDatabase, goal: FitnessGoal, level: ActivityLevel) -> PlanParameters {
    let mut uow = db.begin().await.unwrap();
    let plan = uow
        .create_plan(&NewWorkoutPlan {
            user_id: 7,
            plan_name: "Test Plan".to_string(),
            fitness_goal: goal,
            activity_level: level,
            primary_focus: None,
        })
        .await
        .unwrap();
    uow.commit().await.unwrap();

    PlanParameters {
        plan_id: plan.plan_id,
        fitness_goal: goal,
        activity_level: level,
        primary_focus: None,
    }
}

async fn generate(
    db: &MemoryDatabase,
    params: &PlanParameters,
) -> Result<GeneratedWorkouts, PlanGenerationError> {
    let mut uow = db.begin().await.unwrap();
    let result = WorkoutPlanGenerator::new().generate(&mut uow, params).await;
    if result.is_ok() {
        uow.commit().await.unwrap();
    }
    result
}

fn ids(workouts: &GeneratedWorkouts, day: &str) -> Vec<i32> {
    workouts.workouts[day].iter().map(|e| e.id).collect()
}

#[tokio::test]
async fn test_every_level_produces_one_row_per_weekday() {
    for level in ActivityLevel::ALL {
        let db = MemoryDatabase::with_exercises(full_catalog());
        let params = create_plan(&db, FitnessGoal::GeneralFitness, level).await;

        let generated = generate(&db, &params).await.unwrap();

        let days: Vec<String> = db
            .plan_days(params.plan_id)
            .unwrap()
            .into_iter()
            .map(|day| day.day_of_week)
            .collect();
        assert_eq!(days, WEEKDAYS.map(String::from).to_vec(), "level {}", level);
        assert_eq!(generated.workouts.len(), 7);
    }
}

#[tokio::test]
async fn test_regeneration_replaces_previous_days() {
    let db = MemoryDatabase::with_exercises(full_catalog());
    let params = create_plan(&db, FitnessGoal::Maintenance, ActivityLevel::ModeratelyActive).await;

    generate(&db, &params).await.unwrap();
    let first_ids: Vec<i32> = db.plan_days(params.plan_id).unwrap().iter().map(|d| d.plan_day_id).collect();

    generate(&db, &params).await.unwrap();
    let second = db.plan_days(params.plan_id).unwrap();

    assert_eq!(second.len(), 7);
    assert!(second.iter().all(|day| !first_ids.contains(&day.plan_day_id)));
    for stale in first_ids {
        assert!(db.plan_exercises(stale).unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_muscle_gain_very_active_week() {
    let db = MemoryDatabase::with_exercises(full_catalog());
    let params = create_plan(&db, FitnessGoal::MuscleGain, ActivityLevel::VeryActive).await;

    let generated = generate(&db, &params).await.unwrap();

    assert_eq!(ids(&generated, "Monday"), vec![11, 12, 13, 14]);
    assert_eq!(ids(&generated, "Tuesday"), vec![21, 22, 23]);
    assert_eq!(ids(&generated, "Wednesday"), vec![16, 17]);
    assert_eq!(ids(&generated, "Thursday"), vec![23, 24]);
    assert_eq!(ids(&generated, "Friday"), vec![31, 32]);
    assert_eq!(ids(&generated, "Saturday"), vec![11, 12, 13, 17]);

    let sunday = &generated.workouts["Sunday"];
    assert_eq!(sunday.len(), 4);
    assert!(sunday.iter().all(|e| recovery_ids().contains(&e.id)));
    assert!(sunday.iter().all(|e| e.sets == 2 && e.reps == 12));

    for day in &WEEKDAYS[..6] {
        assert!(generated.workouts[*day].iter().all(|e| e.sets == 3 && e.reps == 12));
    }

    let focuses: Vec<String> = db
        .plan_days(params.plan_id)
        .unwrap()
        .into_iter()
        .map(|day| day.focus)
        .collect();
    assert_eq!(
        focuses,
        vec![
            "Upper Body",
            "Lower Body",
            "Upper Body",
            "Lower Body",
            "Core",
            "Upper Body",
            "Recovery"
        ]
    );
}

#[tokio::test]
async fn test_persisted_rows_are_ordered_from_one() {
    let db = MemoryDatabase::with_exercises(full_catalog());
    let params = create_plan(&db, FitnessGoal::MuscleGain, ActivityLevel::VeryActive).await;
    generate(&db, &params).await.unwrap();

    let monday = &db.plan_days(params.plan_id).unwrap()[0];
    let rows = db.plan_exercises(monday.plan_day_id).unwrap();

    let order: Vec<i32> = rows.iter().map(|r| r.order_index).collect();
    assert_eq!(order, vec![1, 2, 3, 4]);
    assert!(rows.iter().all(|r| r.sets == 3 && r.reps == 12));
}

#[tokio::test]
async fn test_persisted_rows_match_response_for_every_day() {
    for level in ActivityLevel::ALL {
        let db = MemoryDatabase::with_exercises(full_catalog());
        let params = create_plan(&db, FitnessGoal::MuscleGain, level).await;

        let generated = generate(&db, &params).await.unwrap();

        for day in db.plan_days(params.plan_id).unwrap() {
            let rows = db.plan_exercises(day.plan_day_id).unwrap();
            let returned = &generated.workouts[day.day_of_week.as_str()];

            assert_eq!(rows.len(), returned.len(), "{} {}", level, day.day_of_week);
            let row_ids: Vec<i32> = rows.iter().map(|r| r.exercise_id).collect();
            let returned_ids: Vec<i32> = returned.iter().map(|e| e.id).collect();
            assert_eq!(row_ids, returned_ids);
            if day.focus == "Rest" {
                assert!(rows.is_empty());
            }
        }
    }
}

#[tokio::test]
async fn test_weight_loss_light_week_avoids_advanced() {
    let db = MemoryDatabase::with_exercises(full_catalog());
    let params = create_plan(&db, FitnessGoal::WeightLoss, ActivityLevel::LightlyActive).await;

    let generated = generate(&db, &params).await.unwrap();

    assert_eq!(ids(&generated, "Monday"), vec![10, 11, 12, 15]);
    for day in ["Tuesday", "Thursday", "Saturday", "Sunday"] {
        assert!(generated.workouts[day].is_empty(), "{} should be a rest day", day);
    }
    let advanced = [13, 14, 17, 22, 24, 32];
    assert!(generated
        .workouts
        .values()
        .flatten()
        .all(|e| !advanced.contains(&e.id)));
}

#[tokio::test]
async fn test_sedentary_with_empty_catalog_gets_fallback() {
    let db = MemoryDatabase::new();
    let params = create_plan(&db, FitnessGoal::WeightLoss, ActivityLevel::Sedentary).await;

    let generated = generate(&db, &params).await.unwrap();

    let monday: Vec<&str> = generated.workouts["Monday"].iter().map(|e| e.name.as_str()).collect();
    assert_eq!(monday, vec!["Wall Push-Ups", "Assisted Dips"]);
    for day in &WEEKDAYS[1..] {
        assert!(generated.workouts[*day].is_empty());
    }

    let days = db.plan_days(params.plan_id).unwrap();
    assert_eq!(days.len(), 7);
    assert!(days[1..].iter().all(|day| day.focus == "Rest"));
}

#[tokio::test]
async fn test_empty_catalog_leaves_active_days_empty() {
    let db = MemoryDatabase::new();
    let params = create_plan(&db, FitnessGoal::Endurance, ActivityLevel::ExtremelyActive).await;

    let generated = generate(&db, &params).await.unwrap();

    assert!(generated.workouts.values().all(Vec::is_empty));
    assert_eq!(db.plan_days(params.plan_id).unwrap().len(), 7);
}

#[tokio::test]
async fn test_unknown_plan_is_rejected_without_writes() {
    let db = MemoryDatabase::with_exercises(full_catalog());
    let params = PlanParameters {
        plan_id: 404,
        fitness_goal: FitnessGoal::Maintenance,
        activity_level: ActivityLevel::VeryActive,
        primary_focus: None,
    };

    let result = generate(&db, &params).await;

    assert_matches!(result, Err(PlanGenerationError::PlanNotFound(404)));
    assert!(db.plan_days(404).unwrap().is_empty());
}

#[tokio::test]
async fn test_catalog_failure_surfaces_as_catalog_error() {
    let db = MemoryDatabase::with_exercises(full_catalog());
    let params = create_plan(&db, FitnessGoal::Maintenance, ActivityLevel::VeryActive).await;
    db.fail_catalog_queries(true).unwrap();

    let result = generate(&db, &params).await;

    assert_matches!(result, Err(PlanGenerationError::CatalogQueryFailed(_)));
    assert!(db.plan_days(params.plan_id).unwrap().is_empty());
}

#[tokio::test]
async fn test_notes_follow_goal_level_and_focus() {
    let db = MemoryDatabase::with_exercises(full_catalog());
    let mut params = create_plan(&db, FitnessGoal::MuscleGain, ActivityLevel::VeryActive).await;
    params.primary_focus = Some("strength".to_string());

    let with_focus = generate(&db, &params).await.unwrap();
    params.primary_focus = None;
    let without_focus = generate(&db, &params).await.unwrap();

    assert!(with_focus.notes.starts_with(plan_notes::goal_note("muscle_gain")));
    assert!(with_focus.notes.contains(plan_notes::activity_note("very_active")));
    assert!(with_focus.notes.contains(plan_notes::focus_note("strength")));
    assert!(without_focus.notes.contains(plan_notes::focus_note("")));
    assert!(without_focus.notes.ends_with(plan_notes::CLOSING_NOTE));
}
