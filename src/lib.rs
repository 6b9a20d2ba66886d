pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{NutriGrade, NutritionalData, NutritionalScore, ScoreType};
pub use scoring::get_nutrition_score;
