// Business logic services

pub mod errors;
pub mod day_templates;
pub mod exercise_selector;
pub mod special_days;
pub mod plan_notes;
pub mod workout_plan_generator;

pub use errors::PlanGenerationError;
pub use workout_plan_generator::WorkoutPlanGenerator;
