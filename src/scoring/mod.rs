pub mod calculations;
pub mod constants;

pub use calculations::{
    get_nutri_grade, get_nutrition_score, get_points_from_range, NutrientPoints, PointsBreakdown,
};
pub use constants::*;
