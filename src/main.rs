use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use nutri_score_rs::cli::Cli;
use nutri_score_rs::error::Result;
use nutri_score_rs::interface::display_score;
use nutri_score_rs::models::*;
use nutri_score_rs::scoring::get_nutrition_score;
use nutri_score_rs::state::load_input;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nutri_score_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let (data, file_category) = match &cli.file {
        Some(path) => {
            let input = load_input(path)?;
            (input.data, input.category)
        }
        None if cli.has_nutrients() => (data_from_flags(&cli), None),
        None => (sample_product(), None),
    };
    let score_type = cli.category.or(file_category).unwrap_or_default();

    if cli.strict {
        if let Err(e) = data.validate() {
            warn!(error = %e, "rejected input");
            return Err(e);
        }
    }

    let score = get_nutrition_score(data, score_type);
    display_score(&data, &score);

    Ok(())
}

fn data_from_flags(cli: &Cli) -> NutritionalData {
    let energy = match (cli.energy_kcal, cli.energy_kj) {
        (Some(kcal), _) => energy_from_kcal(kcal),
        (None, kj) => EnergyKj(kj.unwrap_or_default()),
    };
    let sodium = match (cli.salt, cli.sodium) {
        (Some(salt), _) => sodium_from_salt(salt),
        (None, mg) => SodiumMilligram(mg.unwrap_or_default()),
    };

    NutritionalData {
        energy,
        sugar: SugarGram(cli.sugar.unwrap_or_default()),
        saturated_fat: SaturatedFatGram(cli.saturated_fat.unwrap_or_default()),
        sodium,
        fruits: FruitsPercent(cli.fruits.unwrap_or_default()),
        fiber: FiberGram(cli.fiber.unwrap_or_default()),
        protein: ProteinGram(cli.protein.unwrap_or_default()),
    }
}

/// Product scored when no measurements are given.
fn sample_product() -> NutritionalData {
    NutritionalData {
        energy: energy_from_kcal(10.0),
        sugar: SugarGram(10.0),
        saturated_fat: SaturatedFatGram(2.0),
        sodium: SodiumMilligram(4.0),
        fruits: FruitsPercent(2.0),
        fiber: FiberGram(60.0),
        protein: ProteinGram(500.0),
    }
}
