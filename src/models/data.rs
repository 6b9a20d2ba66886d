use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::models::nutrients::*;

/// Per-100g/100ml measurements of one product.
///
/// Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionalData {
    #[serde(rename = "energy_kj")]
    pub energy: EnergyKj,

    #[serde(rename = "sugar_g")]
    pub sugar: SugarGram,

    #[serde(rename = "saturated_fat_g")]
    pub saturated_fat: SaturatedFatGram,

    #[serde(rename = "sodium_mg")]
    pub sodium: SodiumMilligram,

    #[serde(rename = "fruits_percent")]
    pub fruits: FruitsPercent,

    #[serde(rename = "fiber_g")]
    pub fiber: FiberGram,

    #[serde(rename = "protein_g")]
    pub protein: ProteinGram,
}

impl NutritionalData {
    fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("energy", self.energy.value()),
            ("sugar", self.sugar.value()),
            ("saturated fat", self.saturated_fat.value()),
            ("sodium", self.sodium.value()),
            ("fruits", self.fruits.value()),
            ("fiber", self.fiber.value()),
            ("protein", self.protein.value()),
        ]
    }

    /// Finite, non-negative amounts and a fruit share within 0..=100.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Optional strict check. Scoring accepts any value and never calls this.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                return Err(NutriError::InvalidInput(format!("{name} is not finite")));
            }
            if value < 0.0 {
                return Err(NutriError::InvalidInput(format!(
                    "{name} is negative ({value})"
                )));
            }
        }
        if self.fruits.value() > 100.0 {
            return Err(NutriError::InvalidInput(format!(
                "fruits percentage above 100 ({})",
                self.fruits.value()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> NutritionalData {
        NutritionalData {
            energy: EnergyKj(1000.0),
            sugar: SugarGram(5.0),
            saturated_fat: SaturatedFatGram(1.5),
            sodium: SodiumMilligram(200.0),
            fruits: FruitsPercent(30.0),
            fiber: FiberGram(2.0),
            protein: ProteinGram(6.0),
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_data().is_valid());
        assert!(NutritionalData::default().is_valid());
    }

    #[test]
    fn test_rejects_negative() {
        let mut data = sample_data();
        data.sugar = SugarGram(-1.0);
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("sugar"));
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut data = sample_data();
        data.energy = EnergyKj(f64::NAN);
        assert!(!data.is_valid());
    }

    #[test]
    fn test_rejects_fruits_above_hundred() {
        let mut data = sample_data();
        data.fruits = FruitsPercent(100.5);
        assert!(!data.is_valid());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let data: NutritionalData = serde_json::from_str(r#"{"sugar_g": 12.5}"#).unwrap();
        assert_eq!(data.sugar, SugarGram(12.5));
        assert_eq!(data.energy, EnergyKj(0.0));
        assert_eq!(data.protein, ProteinGram(0.0));
    }
}
