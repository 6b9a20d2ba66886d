use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{NutritionalData, ScoreType};

/// One product read from disk: its measurements and, optionally, its category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub category: Option<ScoreType>,

    #[serde(flatten)]
    pub data: NutritionalData,
}

/// Load a product from a JSON file.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ProductInput> {
    let content = fs::read_to_string(path)?;
    let input: ProductInput = serde_json::from_str(&content)?;
    Ok(input)
}

/// Save a product to a JSON file.
pub fn save_input<P: AsRef<Path>>(path: P, input: &ProductInput) -> Result<()> {
    let json = serde_json::to_string_pretty(input)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NutriError;
    use crate::models::{FiberGram, SugarGram};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_with_category() {
        let json = r#"{"category": "beverage", "sugar_g": 8.0, "fiber_g": 1.2}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.category, Some(ScoreType::Beverage));
        assert_eq!(input.data.sugar, SugarGram(8.0));
        assert_eq!(input.data.fiber, FiberGram(1.2));
    }

    #[test]
    fn test_save_and_reload() {
        let input = ProductInput {
            category: Some(ScoreType::Cheese),
            data: NutritionalData {
                sugar: SugarGram(3.0),
                ..Default::default()
            },
        };

        let file = NamedTempFile::new().unwrap();
        save_input(file.path(), &input).unwrap();

        let reloaded = load_input(file.path()).unwrap();
        assert_eq!(reloaded, input);
    }

    #[test]
    fn test_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(load_input(file.path()), Err(NutriError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_input("/definitely/not/here.json"),
            Err(NutriError::Io(_))
        ));
    }
}
