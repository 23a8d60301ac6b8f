use clap::Args;
use label_lens::error::AppError;
use label_lens::scoring::LabelRelevance;
use label_lens::{score, Lens, ScoreResult};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Lens to score under: focus, real_food or personal
    #[arg(long, value_parser = parse_lens)]
    pub(crate) lens: Lens,
    /// Ingredient list as printed on the label
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub(crate) text: Option<String>,
    /// Read the ingredient list from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// User profile as a JSON object (Personal Fit only)
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_lens(raw: &str) -> Result<Lens, String> {
    raw.parse::<Lens>().map_err(|err| err.to_string())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        lens,
        text,
        file,
        profile,
        json,
    } = args;

    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "either --text or --file is required".to_string(),
            ))
        }
    };
    let profile = profile.as_deref().map(parse_profile).transpose()?;

    let result = score(&text, lens, profile.as_ref())?;
    if json {
        println!("{}", to_pretty_json(&result)?);
    } else {
        render_result(&result);
    }
    Ok(())
}

fn parse_profile(raw: &str) -> Result<Value, AppError> {
    serde_json::from_str(raw)
        .map_err(|err| AppError::InvalidRequest(format!("--profile is not valid JSON ({err})")))
}

fn to_pretty_json(result: &ScoreResult) -> Result<String, AppError> {
    serde_json::to_string_pretty(result)
        .map_err(|err| AppError::InvalidRequest(format!("result could not be rendered ({err})")))
}

struct Scenario {
    title: &'static str,
    text: &'static str,
    lens: Lens,
    profile: Option<Value>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "Sweetened snack bar",
            text: "sugar, corn syrup, natural flavors, almonds",
            lens: Lens::Focus,
            profile: None,
        },
        Scenario {
            title: "Plain oats",
            text: "oats, water, salt",
            lens: Lens::RealFood,
            profile: None,
        },
        Scenario {
            title: "Vanilla milk for a vegan shopper",
            text: "milk, sugar, vanilla",
            lens: Lens::Personal,
            profile: Some(json!({ "dietary_rules": ["vegan"] })),
        },
    ]
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Label Lens demo");
    for scenario in scenarios() {
        println!("\n== {} ==", scenario.title);
        println!("Ingredients: {}", scenario.text);
        let result = score(scenario.text, scenario.lens, scenario.profile.as_ref())?;
        render_result(&result);
    }
    Ok(())
}

pub(crate) fn render_result(result: &ScoreResult) {
    println!("{}: {}/100", result.lens.label(), result.score);
    println!(
        "Bar: +{} / -{} ({:.0}% / {:.0}%)",
        result.bar.positive_points(),
        result.bar.negative_points(),
        result.bar.positive_ratio() * 100.0,
        result.bar.negative_ratio() * 100.0
    );

    print_section("What helps", &result.reasons.positives);
    print_section("What hurts", &result.reasons.concerns);

    let breakdown = &result.ingredients_breakdown;
    println!("\nIngredients");
    for (heading, bucket) in [
        ("Supportive", &breakdown.positive_for_lens),
        ("Mixed", &breakdown.mixed_for_lens),
        ("Concerning", &breakdown.negative_for_lens),
        ("Neutral", &breakdown.neutral_for_lens),
    ] {
        if !bucket.is_empty() {
            println!("  {heading}: {}", bucket.join(", "));
        }
    }

    if !result.lab_labels.is_empty() {
        println!("\nLab labels");
        for label in &result.lab_labels {
            println!("- {}: {}", label.ingredient, label.plain_english);
            match &label.relevance {
                LabelRelevance::Focus(note) | LabelRelevance::Personal(note) => {
                    println!("    {note}")
                }
                LabelRelevance::RealFood(uses) => println!("    Common in {}", uses.join(", ")),
            }
        }
    }

    print_section("Notes", &result.notes);
}

fn print_section(heading: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("\n{heading}");
    for line in lines {
        println!("- {line}");
    }
}
