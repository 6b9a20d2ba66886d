use serde::{Deserialize, Serialize};

use crate::scoring::constants::{KCAL_TO_KJ, SALT_TO_SODIUM};

macro_rules! nutrient {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            #[inline]
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                Self(v)
            }
        }
    };
}

nutrient!(
    /// Energy per 100g/100ml in kilojoules.
    EnergyKj
);
nutrient!(
    /// Sugars per 100g/100ml in grams.
    SugarGram
);
nutrient!(
    /// Saturated fatty acids per 100g/100ml in grams.
    SaturatedFatGram
);
nutrient!(
    /// Sodium per 100g/100ml in milligrams.
    SodiumMilligram
);
nutrient!(
    /// Fruit, vegetable and nut content as a percentage.
    FruitsPercent
);
nutrient!(
    /// Fiber per 100g/100ml in grams.
    FiberGram
);
nutrient!(
    /// Protein per 100g/100ml in grams.
    ProteinGram
);

impl EnergyKj {
    pub fn from_kcal(kcal: f64) -> Self {
        Self(kcal * KCAL_TO_KJ)
    }
}

impl SodiumMilligram {
    /// Sodium content of the given amount of salt (both in milligrams).
    pub fn from_salt(salt_mg: f64) -> Self {
        Self(salt_mg / SALT_TO_SODIUM)
    }
}

/// Convert kilocalories to kilojoules.
pub fn energy_from_kcal(kcal: f64) -> EnergyKj {
    EnergyKj::from_kcal(kcal)
}

/// Convert a salt mass to its sodium mass.
pub fn sodium_from_salt(salt_mg: f64) -> SodiumMilligram {
    SodiumMilligram::from_salt(salt_mg)
}
