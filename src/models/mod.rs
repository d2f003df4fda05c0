// Data models for the workout planner

pub mod taxonomy;
pub mod exercise;
pub mod workout_plan;

pub use taxonomy::*;
pub use exercise::*;
pub use workout_plan::*;
