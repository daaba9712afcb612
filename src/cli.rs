use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, Goal, Sex};
use crate::planner::DEFAULT_PLAN_DAYS;

/// DietCoach: calorie and macro targets plus multi-day meal plans.
#[derive(Parser, Debug)]
#[command(name = "diet_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the food catalog JSON file.
    #[arg(short, long, global = true, env = "DIET_COACH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Never prompt; missing values are an error.
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute BMR, TDEE, and daily calorie/macro targets.
    Targets(ProfileArgs),

    /// Generate a meal plan for given calorie and macro targets.
    Plan(PlanArgs),

    /// Compute targets from body stats, then generate a plan for them.
    Auto {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        options: PlanOptions,
    },

    /// List supported dietary restrictions.
    Diets,

    /// List catalog foods compatible with the given restrictions.
    Foods {
        /// Dietary restriction tag (repeatable).
        #[arg(short, long = "diet")]
        diet: Vec<String>,
    },
}

/// Body stats. Anything left out is prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// male or female
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Age in years (10-120).
    #[arg(long)]
    pub age: Option<u32>,

    /// Height in centimeters (100-250).
    #[arg(long)]
    pub height_cm: Option<f64>,

    /// Weight in kilograms (30-300).
    #[arg(long)]
    pub weight_kg: Option<f64>,

    /// sedentary, light, moderate, active, or very_active
    #[arg(long)]
    pub activity_level: Option<ActivityLevel>,

    /// cut, maintain, or bulk
    #[arg(long)]
    pub goal: Option<Goal>,
}

/// Daily targets for `plan`. Anything left out is prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Daily calories (800-6000).
    #[arg(long)]
    pub calories: Option<f64>,

    /// Daily protein in grams (50-400).
    #[arg(long)]
    pub protein_g: Option<f64>,

    /// Daily fat in grams (20-200).
    #[arg(long)]
    pub fat_g: Option<f64>,

    /// Daily carbohydrates in grams (50-800).
    #[arg(long)]
    pub carbs_g: Option<f64>,

    #[command(flatten)]
    pub options: PlanOptions,
}

#[derive(Args, Debug, Clone)]
pub struct PlanOptions {
    /// Dietary restriction tag (repeatable): veg, non_veg, vegan, halal, lactose_free, budget.
    #[arg(short, long = "diet")]
    pub diet: Vec<String>,

    /// Number of days to plan (1-14).
    #[arg(long, default_value_t = DEFAULT_PLAN_DAYS)]
    pub days: u32,

    /// Seed for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            diet: Vec::new(),
            days: DEFAULT_PLAN_DAYS,
            seed: None,
        }
    }
}
