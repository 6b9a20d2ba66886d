use crate::models::{NutritionalData, NutritionalScore, ScoreType};

/// Render a score breakdown as printable lines.
pub fn format_score(data: &NutritionalData, score: &NutritionalScore) -> String {
    let mut out = String::new();

    out.push_str(&format!("Category: {}\n", score.score_type));

    if score.score_type != ScoreType::Water {
        let points = data.breakdown(score.score_type);
        let rows = [
            ("Energy", data.energy.value(), "kJ", points.energy),
            ("Sugar", data.sugar.value(), "g", points.sugar),
            ("Saturated fat", data.saturated_fat.value(), "g", points.saturated_fat),
            ("Sodium", data.sodium.value(), "mg", points.sodium),
            ("Fruits/veg/nuts", data.fruits.value(), "%", points.fruits),
            ("Fiber", data.fiber.value(), "g", points.fiber),
            ("Protein", data.protein.value(), "g", points.protein),
        ];
        for (name, value, unit, pts) in rows {
            out.push_str(&format!("  {name:<16} {value:>9.2} {unit:<2} => {pts:>2} pts\n"));
        }
        out.push_str(&format!(
            "Negative: {}  Positive: {}\n",
            score.negative, score.positive
        ));
    }

    out.push_str(&format!("The nutritional score is: {}\n", score.value));
    out.push_str(&format!("The nutriScore: {}\n", score.nutri_score()));
    out
}

/// Print a score breakdown to stdout.
pub fn display_score(data: &NutritionalData, score: &NutritionalScore) {
    print!("{}", format_score(data, score));
}
