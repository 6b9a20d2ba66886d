use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NutriError;

/// Product category; selects the threshold tables and combination rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    #[default]
    Food,
    Beverage,
    Water,
    Cheese,
}

impl ScoreType {
    pub const ALL: [ScoreType; 4] = [
        ScoreType::Food,
        ScoreType::Beverage,
        ScoreType::Water,
        ScoreType::Cheese,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreType::Food => "food",
            ScoreType::Beverage => "beverage",
            ScoreType::Water => "water",
            ScoreType::Cheese => "cheese",
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreType {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(ScoreType::Food),
            "beverage" => Ok(ScoreType::Beverage),
            "water" => Ok(ScoreType::Water),
            "cheese" => Ok(ScoreType::Cheese),
            other => Err(NutriError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Beverage".parse::<ScoreType>().unwrap(), ScoreType::Beverage);
        assert_eq!(" CHEESE ".parse::<ScoreType>().unwrap(), ScoreType::Cheese);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "soup".parse::<ScoreType>(),
            Err(NutriError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for st in ScoreType::ALL {
            assert_eq!(st.to_string().parse::<ScoreType>().unwrap(), st);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ScoreType::Water).unwrap(), "\"water\"");
        let st: ScoreType = serde_json::from_str("\"cheese\"").unwrap();
        assert_eq!(st, ScoreType::Cheese);
    }
}
