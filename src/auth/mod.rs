// Authentication of API callers

pub mod errors;
pub mod extractor;
pub mod jwt;
pub mod models;

pub use errors::*;
pub use jwt::*;
pub use models::*;
