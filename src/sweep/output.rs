use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::planner::validation::round_to;
use crate::sweep::evaluation::{ComboSummary, RunMetrics};

/// Label used for the unrestricted combination.
fn tags_label(tags: &str) -> &str {
    if tags.is_empty() { "(none)" } else { tags }
}

/// Write every run to a CSV file.
pub fn write_runs_csv(runs: &[RunMetrics], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "tags",
        "seed",
        "adherence",
        "avg_daily_calories",
        "entries",
        "meals",
        "sparse_meals",
    ])?;

    for run in runs {
        wtr.write_record([
            run.tags.clone(),
            run.seed.to_string(),
            format!("{:.3}", run.adherence),
            format!("{:.1}", run.avg_daily_calories),
            run.entries.to_string(),
            run.meals.to_string(),
            run.sparse_meals.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the ranked per-combination summary to a JSON file.
pub fn write_summary_json(summaries: &[ComboSummary], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "combinations": summaries.iter().enumerate().map(|(i, s)| {
            serde_json::json!({
                "rank": i + 1,
                "tags": s.tags,
                "runs": s.runs,
                "infeasible": s.infeasible,
                "mean_adherence": round_to(s.mean_adherence, 3),
                "min_adherence": round_to(s.min_adherence, 3),
                "max_adherence": round_to(s.max_adherence, 3),
                "mean_entries_per_meal": round_to(s.mean_entries_per_meal, 2),
                "sparse_meals": s.sparse_meals,
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the ranked summary to stdout.
pub fn print_summary(summaries: &[ComboSummary]) {
    println!("\n=== Adherence by Restriction ({} combinations) ===\n", summaries.len());

    let width = summaries
        .iter()
        .map(|s| tags_label(&s.tags).len())
        .max()
        .unwrap_or(6);

    for (i, s) in summaries.iter().enumerate() {
        if s.infeasible {
            println!(
                "#{:<2} {:<width$}  no foods available",
                i + 1,
                tags_label(&s.tags),
                width = width
            );
            continue;
        }
        println!(
            "#{:<2} {:<width$}  adherence {:.3} (min {:.3}, max {:.3})  entries/meal {:.2}  sparse meals {}",
            i + 1,
            tags_label(&s.tags),
            s.mean_adherence,
            s.min_adherence,
            s.max_adherence,
            s.mean_entries_per_meal,
            s.sparse_meals,
            width = width
        );
    }
    println!();
}
