// Shared fixtures for the integration tests
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use serde_json::Value;
use std::time::Duration;

use workout_planner::api::create_routes;
use workout_planner::auth::{JwtService, UserRole};
use workout_planner::config::AppConfig;
use workout_planner::database::MemoryDatabase;
use workout_planner::models::{Difficulty, ExerciseCandidate};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";

pub fn exercise(
    id: i32,
    name: &str,
    difficulty: Difficulty,
    group: &str,
    muscles: &[&str],
) -> ExerciseCandidate {
    ExerciseCandidate {
        exercise_id: id,
        name: name.to_string(),
        difficulty,
        equipment_options: vec!["None".to_string()],
        video_url: None,
        muscle_groups: vec![group.to_string()],
        muscles: muscles.iter().map(|m| m.to_string()).collect(),
    }
}

/// A catalog covering every training day of every schedule, plus six recovery moves.
pub fn full_catalog() -> Vec<ExerciseCandidate> {
    use Difficulty::*;

    vec![
        exercise(10, "Push-Ups", Beginner, "Upper Body", &["Chest", "Triceps"]),
        exercise(11, "Bench Press", Intermediate, "Upper Body", &["Chest", "Triceps"]),
        exercise(12, "Incline Press", Intermediate, "Upper Body", &["Chest", "Shoulders"]),
        exercise(13, "Weighted Dips", Advanced, "Upper Body", &["Chest", "Triceps"]),
        exercise(14, "Close-Grip Press", Advanced, "Upper Body", &["Triceps"]),
        exercise(15, "Cable Row", Beginner, "Upper Body", &["Back", "Biceps"]),
        exercise(16, "Pull-Ups", Intermediate, "Upper Body", &["Back", "Biceps"]),
        exercise(17, "Muscle-Ups", Advanced, "Upper Body", &["Back", "Shoulders"]),
        exercise(18, "Overhead Press", Intermediate, "Upper Body", &["Shoulders"]),
        exercise(20, "Bodyweight Squat", Beginner, "Lower Body", &["Quadriceps", "Glutes"]),
        exercise(21, "Back Squat", Intermediate, "Lower Body", &["Quadriceps", "Glutes"]),
        exercise(22, "Pistol Squat", Advanced, "Lower Body", &["Quadriceps"]),
        exercise(23, "Romanian Deadlift", Intermediate, "Lower Body", &["Hamstrings", "Glutes"]),
        exercise(24, "Nordic Curl", Advanced, "Lower Body", &["Hamstrings"]),
        exercise(25, "Calf Raise", Beginner, "Lower Body", &["Calves"]),
        exercise(30, "Plank", Beginner, "Core", &["Abdominals", "Lower Back"]),
        exercise(31, "Russian Twist", Intermediate, "Core", &["Obliques"]),
        exercise(32, "Hanging Leg Raise", Advanced, "Core", &["Abdominals"]),
        exercise(33, "Back Extension", Beginner, "Core", &["Lower Back"]),
        exercise(40, "Foam Rolling", Beginner, "Recovery", &[]),
        exercise(41, "Cat-Cow Stretch", Beginner, "Recovery", &[]),
        exercise(42, "Light Walking", Beginner, "Recovery", &[]),
        exercise(43, "Hip Flexor Stretch", Beginner, "Recovery", &[]),
        exercise(44, "Child's Pose", Beginner, "Recovery", &[]),
        exercise(45, "Thoracic Rotation", Beginner, "Recovery", &[]),
    ]
}

pub fn recovery_ids() -> Vec<i32> {
    full_catalog()
        .into_iter()
        .filter(|e| e.muscle_groups.iter().any(|g| g == "Recovery"))
        .map(|e| e.exercise_id)
        .collect()
}

pub fn test_config(plan_debounce: Duration) -> AppConfig {
    let mut config = AppConfig::from_lookup(|_| None).expect("defaults always parse");
    config.jwt_secret = TEST_JWT_SECRET.to_string();
    config.environment = "test".to_string();
    config.plan_debounce = plan_debounce;
    config
}

pub fn test_app(db: MemoryDatabase) -> Router {
    create_routes(db, &test_config(Duration::ZERO))
}

pub fn bearer_token(user_id: i32) -> String {
    let token = JwtService::new(TEST_JWT_SECRET)
        .create_access_token(user_id, &format!("user{}@example.com", user_id), UserRole::Member)
        .expect("token should encode");
    format!("Bearer {}", token)
}

pub fn authed_request(method: Method, uri: &str, user_id: i32, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer_token(user_id));

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}
