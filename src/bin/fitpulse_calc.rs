//! One-shot nutrition calculator
//!
//! Runs the FitPulse estimator from command-line flags and prints the result.

use clap::Parser;

use fitpulse::models::CalculatorForm;
use fitpulse::tools::calculator::{calculate_nutrition, CalculateNutritionResponse};

#[derive(Parser)]
#[command(name = "fitpulse_calc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Calculate BMR, TDEE, calorie target and macros")]
struct Cli {
    /// Age in whole years
    #[arg(long)]
    age: String,

    /// male or female
    #[arg(long)]
    sex: String,

    /// Weight in kilograms
    #[arg(long)]
    weight: String,

    /// Height in centimeters
    #[arg(long)]
    height: String,

    /// Activity level (sedentary, light, moderate, heavy, athlete) or multiplier
    #[arg(long, default_value = "1.2")]
    activity: String,

    /// cut, maintain or bulk
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_text(response: &CalculateNutritionResponse) {
    let r = &response.result;
    println!("Goal:            {}", response.input.goal_label);
    println!("Activity:        {}", response.input.activity_label);
    println!();
    println!("Daily target:    {} kcal", r.target_calories);
    println!("BMR:             {} kcal", r.bmr);
    println!("TDEE:            {} kcal", r.tdee);
    println!();
    println!("Protein ({}%):   {} g", r.split.protein_pct, r.macros.protein_g);
    println!("Fats ({}%):      {} g", r.split.fat_pct, r.macros.fat_g);
    println!("Carbs ({}%):     {} g", r.split.carbs_pct, r.macros.carbs_g);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let form = CalculatorForm {
        age: cli.age,
        sex: cli.sex,
        weight_kg: cli.weight,
        height_cm: cli.height,
        activity: cli.activity,
        goal: cli.goal,
    };

    match calculate_nutrition(&form) {
        Ok(response) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_text(&response);
            }
            Ok(())
        }
        Err(failure) => {
            eprintln!("{}:", failure.error);
            for field in &failure.fields {
                eprintln!("  {}: {}", field.field, field.message);
            }
            std::process::exit(2);
        }
    }
}
