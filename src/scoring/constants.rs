//! Threshold tables, all in descending order per 100g/100ml.

/// Kilojoules per kilocalorie.
pub const KCAL_TO_KJ: f64 = 4.184;

/// Salt mass divided by this gives the sodium mass.
pub const SALT_TO_SODIUM: f64 = 2.5;

// ─────────────────────────────────────────────────────────────────────────────
// Negative nutrients
// ─────────────────────────────────────────────────────────────────────────────

/// Energy (kJ) for food, cheese and water.
pub static ENERGY_LEVELS: [f64; 10] = [
    3350.0, 3015.0, 2680.0, 2345.0, 2010.0, 1675.0, 1340.0, 1005.0, 670.0, 335.0,
];

/// Energy (kJ) for beverages.
pub static ENERGY_LEVELS_BEVERAGE: [f64; 9] =
    [270.0, 240.0, 210.0, 180.0, 150.0, 90.0, 60.0, 30.0, 0.0];

/// Sugars (g) for food, cheese and water.
///
/// NOTE: the first two entries are out of order (45 < 60). Anything above 45
/// scores 10, (36, 45] scores 8, and 9 is unreachable. Kept as published.
pub static SUGARS_LEVELS: [f64; 10] = [45.0, 60.0, 36.0, 31.0, 27.0, 22.5, 18.0, 13.5, 9.0, 4.5];

/// Sugars (g) for beverages.
pub static SUGARS_LEVELS_BEVERAGE: [f64; 10] =
    [13.5, 12.0, 10.5, 9.0, 7.5, 6.0, 4.5, 3.0, 1.5, 0.0];

/// Saturated fatty acids (g).
pub static SATURATED_FAT_LEVELS: [f64; 10] = [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

/// Sodium (mg).
pub static SODIUM_LEVELS: [f64; 10] = [
    900.0, 810.0, 720.0, 630.0, 540.0, 450.0, 360.0, 270.0, 180.0, 90.0,
];

// ─────────────────────────────────────────────────────────────────────────────
// Positive nutrients
// ─────────────────────────────────────────────────────────────────────────────

/// Fiber (g).
pub static FIBER_LEVELS: [f64; 5] = [4.7, 3.7, 2.8, 1.9, 0.9];

/// Protein (g).
pub static PROTEIN_LEVELS: [f64; 5] = [8.0, 6.4, 4.8, 3.2, 1.6];

/// Fruit/vegetable/nut tiers as (threshold %, points); first exceeded wins.
pub static FRUITS_TIERS: [(f64, i32); 3] = [(80.0, 5), (60.0, 2), (40.0, 1)];
pub static FRUITS_TIERS_BEVERAGE: [(f64, i32); 3] = [(80.0, 10), (60.0, 4), (40.0, 2)];

// ─────────────────────────────────────────────────────────────────────────────
// Combination and grading
// ─────────────────────────────────────────────────────────────────────────────

/// Negative points at which fruit and fiber alone offset the score.
pub const NEGATIVE_POINTS_LIMIT: i32 = 11;

/// Fruit points at or above which the negative limit no longer applies.
pub const FRUITS_POINTS_EXEMPTION: i32 = 5;

/// Grade breakpoints for solid food.
pub static GRADE_LEVELS_FOOD: [f64; 4] = [18.0, 10.0, 2.0, -1.0];

/// Grade breakpoints for beverages and cheese.
pub static GRADE_LEVELS_OTHER: [f64; 4] = [9.0, 5.0, 1.0, -2.0];
