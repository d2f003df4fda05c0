use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::taxonomy::Difficulty;

/// Catalog ids reserved for the bodyweight fallback pair.
pub const FALLBACK_EXERCISE_IDS: [i32; 2] = [1, 2];

/// A catalog exercise as returned by tag queries, with its tags flattened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ExerciseCandidate {
    pub exercise_id: i32,
    pub name: String,
    pub difficulty: Difficulty,
    pub equipment_options: Vec<String>,
    pub video_url: Option<String>,
    pub muscle_groups: Vec<String>,
    pub muscles: Vec<String>,
}

/// Catalog filter used by the exercise selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub muscle_groups_or_muscles: Vec<String>,
    pub specific_muscles: Vec<String>,
    pub difficulties: Option<Vec<Difficulty>>, // None means no restriction
    pub limit: usize,
}

impl ExerciseQuery {
    pub fn difficulty_names(&self) -> Option<Vec<String>> {
        self.difficulties
            .as_ref()
            .map(|levels| levels.iter().map(|d| d.as_str().to_string()).collect())
    }
}

/// Shape of one exercise inside the `workouts` map of a generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub id: i32,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub difficulty: Difficulty,
    pub equipment_options: Vec<String>,
    pub muscle_groups: Vec<String>,
}

/// Bodyweight pair handed to sedentary users when the catalog has nothing suitable.
pub fn sedentary_fallback() -> Vec<ExerciseCandidate> {
    vec![
        ExerciseCandidate {
            exercise_id: FALLBACK_EXERCISE_IDS[0],
            name: "Wall Push-Ups".to_string(),
            difficulty: Difficulty::Beginner,
            equipment_options: vec!["None".to_string()],
            video_url: None,
            muscle_groups: vec!["Upper Body".to_string()],
            muscles: vec![],
        },
        ExerciseCandidate {
            exercise_id: FALLBACK_EXERCISE_IDS[1],
            name: "Assisted Dips".to_string(),
            difficulty: Difficulty::Beginner,
            equipment_options: vec!["Chair".to_string()],
            video_url: None,
            muscle_groups: vec!["Upper Body".to_string()],
            muscles: vec![],
        },
    ]
}

#[derive(Debug, Deserialize)]
pub struct ExerciseListQuery {
    pub muscle_group: Option<String>,
}
