use thiserror::Error;

use crate::database::DatabaseError;
use crate::models::UnknownVariant;

#[derive(Error, Debug)]
pub enum PlanGenerationError {
    #[error("{0}")]
    InvalidInput(#[from] UnknownVariant),
    #[error("Workout plan {0} not found")]
    PlanNotFound(i32),
    #[error("No plan days were created for workout plan {0}")]
    GenerationIncomplete(i32),
    #[error("Exercise catalog query failed: {0}")]
    CatalogQueryFailed(#[source] DatabaseError),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
