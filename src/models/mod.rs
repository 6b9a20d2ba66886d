pub mod category;
pub mod data;
pub mod nutrients;
pub mod score;

pub use category::ScoreType;
pub use data::NutritionalData;
pub use nutrients::{
    energy_from_kcal, sodium_from_salt, EnergyKj, FiberGram, FruitsPercent, ProteinGram,
    SaturatedFatGram, SodiumMilligram, SugarGram,
};
pub use score::{NutriGrade, NutritionalScore};
