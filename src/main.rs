use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use diet_coach_rs::catalog::load_catalog;
use diet_coach_rs::cli::{Cli, Command, PlanOptions};
use diet_coach_rs::error::Result;
use diet_coach_rs::interface::{
    collect_profile, collect_targets, display_diet_options, display_food_list, display_plan,
    display_targets,
};
use diet_coach_rs::logging;
use diet_coach_rs::models::{
    DietTags, EnergyReport, MealPlanRequest, NutrientTargets, Plan, DIET_OPTIONS,
};
use diet_coach_rs::planner::{compute_targets, MealPlanner};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Command::Targets(profile) => {
            let profile = collect_profile(profile, cli.no_input)?;
            let report = compute_targets(&profile);
            if cli.json {
                print_json(&report.rounded())
            } else {
                display_targets(&report);
                Ok(())
            }
        }
        Command::Plan(args) => {
            let targets = collect_targets(args, cli.no_input)?;
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let planner = MealPlanner::new(&catalog);
            let (request, plan) = build_plan(&planner, targets, &args.options)?;
            if cli.json {
                print_json(&plan)
            } else {
                display_plan(&plan, &request);
                Ok(())
            }
        }
        Command::Auto { profile, options } => {
            let profile = collect_profile(profile, cli.no_input)?;
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let planner = MealPlanner::new(&catalog);
            let report = planner.compute_targets(&profile)?;

            // Plans are built from the targets as displayed.
            let targets = report.targets.rounded();
            let (request, plan) = build_plan(&planner, targets, options)?;

            if cli.json {
                #[derive(Serialize)]
                struct AutoOutput<'a> {
                    targets: EnergyReport,
                    plan: &'a Plan,
                }
                print_json(&AutoOutput {
                    targets: report.rounded(),
                    plan: &plan,
                })
            } else {
                display_targets(&report);
                display_plan(&plan, &request);
                Ok(())
            }
        }
        Command::Diets => {
            if cli.json {
                print_json(&DIET_OPTIONS)
            } else {
                display_diet_options(&DIET_OPTIONS);
                Ok(())
            }
        }
        Command::Foods { diet } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let tags: DietTags = diet.iter().collect();
            let foods = MealPlanner::new(&catalog).available_foods(&tags);
            if cli.json {
                print_json(&foods)
            } else {
                let title = if tags.is_empty() {
                    "All foods".to_string()
                } else {
                    format!("Foods for {}", tags.joined())
                };
                display_food_list(&foods, &title);
                Ok(())
            }
        }
    }
}

/// Build the request from CLI options and generate the plan.
fn build_plan(
    planner: &MealPlanner<'_>,
    targets: NutrientTargets,
    options: &PlanOptions,
) -> Result<(MealPlanRequest, Plan)> {
    let request = MealPlanRequest::new(targets, options.diet.iter().collect(), options.days);

    let mut rng = match options.seed {
        Some(seed) => {
            debug!(seed, "using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let plan = planner.generate_plan(&request, &mut rng)?;
    Ok((request, plan))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
