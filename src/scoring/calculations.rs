use serde::Serialize;
use tracing::debug;

use crate::models::nutrients::*;
use crate::models::{NutriGrade, NutritionalData, NutritionalScore, ScoreType};
use crate::scoring::constants::*;

/// Bucket a value against descending breakpoints.
///
/// Returns `steps.len() - i` for the first `i` with `v > steps[i]`, else 0.
/// Equal to a breakpoint does not cross it.
pub fn get_points_from_range(v: f64, steps: &[f64]) -> i32 {
    steps
        .iter()
        .position(|&step| v > step)
        .map_or(0, |i| (steps.len() - i) as i32)
}

/// Points one nutrient contributes under a given category.
pub trait NutrientPoints {
    fn points(&self, score_type: ScoreType) -> i32;
}

impl NutrientPoints for EnergyKj {
    fn points(&self, score_type: ScoreType) -> i32 {
        match score_type {
            ScoreType::Beverage => get_points_from_range(self.0, &ENERGY_LEVELS_BEVERAGE),
            ScoreType::Food | ScoreType::Water | ScoreType::Cheese => {
                get_points_from_range(self.0, &ENERGY_LEVELS)
            }
        }
    }
}

impl NutrientPoints for SugarGram {
    fn points(&self, score_type: ScoreType) -> i32 {
        match score_type {
            ScoreType::Beverage => get_points_from_range(self.0, &SUGARS_LEVELS_BEVERAGE),
            ScoreType::Food | ScoreType::Water | ScoreType::Cheese => {
                get_points_from_range(self.0, &SUGARS_LEVELS)
            }
        }
    }
}

impl NutrientPoints for SaturatedFatGram {
    fn points(&self, _score_type: ScoreType) -> i32 {
        get_points_from_range(self.0, &SATURATED_FAT_LEVELS)
    }
}

impl NutrientPoints for SodiumMilligram {
    fn points(&self, _score_type: ScoreType) -> i32 {
        get_points_from_range(self.0, &SODIUM_LEVELS)
    }
}

impl NutrientPoints for FruitsPercent {
    fn points(&self, score_type: ScoreType) -> i32 {
        let tiers = match score_type {
            ScoreType::Beverage => &FRUITS_TIERS_BEVERAGE,
            ScoreType::Food | ScoreType::Water | ScoreType::Cheese => &FRUITS_TIERS,
        };
        tiers
            .iter()
            .find(|(threshold, _)| self.0 > *threshold)
            .map_or(0, |&(_, points)| points)
    }
}

impl NutrientPoints for FiberGram {
    fn points(&self, _score_type: ScoreType) -> i32 {
        get_points_from_range(self.0, &FIBER_LEVELS)
    }
}

impl NutrientPoints for ProteinGram {
    fn points(&self, _score_type: ScoreType) -> i32 {
        get_points_from_range(self.0, &PROTEIN_LEVELS)
    }
}

/// Points of every nutrient for one product and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointsBreakdown {
    pub energy: i32,
    pub sugar: i32,
    pub saturated_fat: i32,
    pub sodium: i32,
    pub fruits: i32,
    pub fiber: i32,
    pub protein: i32,
}

impl PointsBreakdown {
    pub fn negative(&self) -> i32 {
        self.energy + self.sugar + self.saturated_fat + self.sodium
    }

    pub fn positive(&self) -> i32 {
        self.fruits + self.fiber + self.protein
    }
}

impl NutritionalData {
    /// Per-nutrient points. Water is not special-cased here.
    pub fn breakdown(&self, score_type: ScoreType) -> PointsBreakdown {
        PointsBreakdown {
            energy: self.energy.points(score_type),
            sugar: self.sugar.points(score_type),
            saturated_fat: self.saturated_fat.points(score_type),
            sodium: self.sodium.points(score_type),
            fruits: self.fruits.points(score_type),
            fiber: self.fiber.points(score_type),
            protein: self.protein.points(score_type),
        }
    }
}

/// Compute the nutritional score of a product.
///
/// Water always scores zero. Cheese subtracts all positive points. Food and
/// beverages with at least [`NEGATIVE_POINTS_LIMIT`] negative points and
/// fruit points below [`FRUITS_POINTS_EXEMPTION`] also subtract the fruit
/// points a second time.
pub fn get_nutrition_score(data: NutritionalData, score_type: ScoreType) -> NutritionalScore {
    let (value, positive, negative) = match score_type {
        ScoreType::Water => (0, 0, 0),
        ScoreType::Cheese => {
            let points = data.breakdown(score_type);
            let (negative, positive) = (points.negative(), points.positive());
            (negative - positive, positive, negative)
        }
        ScoreType::Food | ScoreType::Beverage => {
            let points = data.breakdown(score_type);
            let (negative, positive) = (points.negative(), points.positive());
            let value =
                if negative >= NEGATIVE_POINTS_LIMIT && points.fruits < FRUITS_POINTS_EXEMPTION {
                    negative - positive - points.fruits
                } else {
                    negative - positive
                };
            debug!(?points, value, %score_type, "scored product");
            (value, positive, negative)
        }
    };

    NutritionalScore {
        value,
        positive,
        negative,
        score_type,
    }
}

/// Map a score to its letter grade.
pub fn get_nutri_grade(score: &NutritionalScore) -> NutriGrade {
    let levels: &[f64] = match score.score_type {
        ScoreType::Water => return NutriGrade::A,
        ScoreType::Food => &GRADE_LEVELS_FOOD,
        ScoreType::Beverage | ScoreType::Cheese => &GRADE_LEVELS_OTHER,
    };
    NutriGrade::from_index(get_points_from_range(f64::from(score.value), levels) as usize)
}
