use std::path::PathBuf;

use clap::Parser;

use diet_coach_rs::catalog::load_catalog;
use diet_coach_rs::error::Result;
use diet_coach_rs::logging;
use diet_coach_rs::models::NutrientTargets;
use diet_coach_rs::planner::MealPlanner;
use diet_coach_rs::sweep::{
    parse_combos, print_summary, run_sweep, write_runs_csv, write_summary_json, SweepConfig,
};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Seeded adherence sweep across dietary restriction combinations")]
struct Args {
    /// Tag combinations: `;` between combinations, `,` between tags. An empty entry means none.
    #[arg(long, default_value = ";veg;vegan;non_veg;halal;lactose_free;budget;vegan,budget")]
    combos: String,

    /// Number of seeds per combination
    #[arg(long, default_value = "20")]
    runs: usize,

    /// First seed; run i uses seed + i
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Daily calories
    #[arg(long, default_value = "2000")]
    calories: f64,

    /// Daily protein in grams
    #[arg(long, default_value = "150")]
    protein_g: f64,

    /// Daily fat in grams
    #[arg(long, default_value = "67")]
    fat_g: f64,

    /// Daily carbohydrates in grams
    #[arg(long, default_value = "200")]
    carbs_g: f64,

    /// Days per plan
    #[arg(long, default_value = "7")]
    days: u32,

    /// Path to the food catalog JSON file
    #[arg(long, env = "DIET_COACH_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output CSV file for every run
    #[arg(long, default_value = "sweep_runs.csv")]
    csv: PathBuf,

    /// Output JSON file for the ranked summary
    #[arg(long, default_value = "sweep_summary.json")]
    json: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let catalog = load_catalog(args.catalog.as_deref())?;
    println!("Loaded {} foods", catalog.len());

    let config = SweepConfig {
        combos: parse_combos(&args.combos),
        runs: args.runs,
        seed: args.seed,
        targets: NutrientTargets::new(args.calories, args.protein_g, args.fat_g, args.carbs_g),
        days: args.days,
    };
    println!(
        "Sweeping {} combinations x {} seeds (from {}), {} days each",
        config.combos.len(),
        config.runs,
        config.seed,
        config.days
    );

    let planner = MealPlanner::new(&catalog);
    let results = run_sweep(&config, &planner)?;

    print_summary(&results.summaries);

    write_runs_csv(&results.runs, &args.csv)?;
    println!("Wrote {} runs to {:?}", results.runs.len(), args.csv);

    write_summary_json(&results.summaries, &args.json)?;
    println!("Wrote summary to {:?}", args.json);

    Ok(())
}
