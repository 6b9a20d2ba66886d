use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::category::ScoreType;
use crate::scoring::calculations::get_nutri_grade;

/// Result of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalScore {
    /// Final score; lower is better.
    pub value: i32,
    /// Sum of fruit, fiber and protein points.
    pub positive: i32,
    /// Sum of energy, sugar, saturated fat and sodium points.
    pub negative: i32,
    pub score_type: ScoreType,
}

impl NutritionalScore {
    pub fn grade(&self) -> NutriGrade {
        get_nutri_grade(self)
    }

    /// One-letter grade, "A" (best) to "E" (worst).
    pub fn nutri_score(&self) -> &'static str {
        self.grade().as_str()
    }
}

/// Letter grades ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NutriGrade {
    A,
    B,
    C,
    D,
    E,
}

impl NutriGrade {
    pub const ALL: [NutriGrade; 5] = [
        NutriGrade::A,
        NutriGrade::B,
        NutriGrade::C,
        NutriGrade::D,
        NutriGrade::E,
    ];

    /// Grade for a bucket index; indices past the table clamp to E.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NutriGrade::A => "A",
            NutriGrade::B => "B",
            NutriGrade::C => "C",
            NutriGrade::D => "D",
            NutriGrade::E => "E",
        }
    }
}

impl fmt::Display for NutriGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
