use clap::Parser;

use crate::models::ScoreType;

/// nutri_score — grade a product from its per-100g/100ml nutrition facts.
///
/// With no nutrient arguments a sample product is scored.
#[derive(Parser, Debug)]
#[command(name = "nutri_score")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Product category: food, beverage, water or cheese.
    #[arg(short, long)]
    pub category: Option<ScoreType>,

    /// Read measurements (and optionally the category) from a JSON file.
    #[arg(short, long, conflicts_with_all = NUTRIENT_ARGS)]
    pub file: Option<String>,

    /// Energy in kilocalories.
    #[arg(long, conflicts_with = "energy_kj")]
    pub energy_kcal: Option<f64>,

    /// Energy in kilojoules.
    #[arg(long)]
    pub energy_kj: Option<f64>,

    /// Sugars in grams.
    #[arg(long)]
    pub sugar: Option<f64>,

    /// Saturated fat in grams.
    #[arg(long)]
    pub saturated_fat: Option<f64>,

    /// Sodium in milligrams.
    #[arg(long, conflicts_with = "salt")]
    pub sodium: Option<f64>,

    /// Salt in milligrams (converted to sodium).
    #[arg(long)]
    pub salt: Option<f64>,

    /// Fruit, vegetable and nut content in percent.
    #[arg(long)]
    pub fruits: Option<f64>,

    /// Fiber in grams.
    #[arg(long)]
    pub fiber: Option<f64>,

    /// Protein in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Reject negative or non-finite measurements before scoring.
    #[arg(long)]
    pub strict: bool,
}

const NUTRIENT_ARGS: [&str; 9] = [
    "energy_kcal",
    "energy_kj",
    "sugar",
    "saturated_fat",
    "sodium",
    "salt",
    "fruits",
    "fiber",
    "protein",
];

impl Cli {
    /// Whether any measurement was given on the command line.
    pub fn has_nutrients(&self) -> bool {
        [
            self.energy_kcal,
            self.energy_kj,
            self.sugar,
            self.saturated_fat,
            self.sodium,
            self.salt,
            self.fruits,
            self.fiber,
            self.protein,
        ]
        .iter()
        .any(Option::is_some)
    }
}
