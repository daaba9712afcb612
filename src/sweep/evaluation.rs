use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::{DietError, Result};
use crate::models::{DayPlan, DietTags, MealPlanRequest, Plan};
use crate::planner::MealPlanner;

/// Meals with fewer entries than this count as sparse.
pub const SPARSE_MEAL_ENTRIES: usize = 3;

/// Metrics for one seeded plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetrics {
    pub tags: String,
    pub seed: u64,
    pub adherence: f64,
    pub avg_daily_calories: f64,
    pub entries: usize,
    pub meals: usize,
    pub sparse_meals: usize,
}

impl RunMetrics {
    pub fn from_plan(tags: &DietTags, seed: u64, plan: &Plan) -> Self {
        let meals = plan.meals().count();
        let sparse_meals = plan
            .meals()
            .filter(|m| m.foods.len() < SPARSE_MEAL_ENTRIES)
            .count();
        Self {
            tags: tags.joined(),
            seed,
            adherence: plan.adherence_score,
            avg_daily_calories: plan.plan_totals.avg_daily_calories,
            entries: plan.days.iter().map(DayPlan::entry_count).sum(),
            meals,
            sparse_meals,
        }
    }

    pub fn entries_per_meal(&self) -> f64 {
        if self.meals == 0 {
            0.0
        } else {
            self.entries as f64 / self.meals as f64
        }
    }
}

/// Aggregated metrics for one diet-tag combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboSummary {
    pub tags: String,
    pub runs: usize,
    pub mean_adherence: f64,
    pub min_adherence: f64,
    pub max_adherence: f64,
    pub mean_entries_per_meal: f64,
    pub sparse_meals: usize,
    /// The restrictions left no food at all.
    pub infeasible: bool,
}

impl ComboSummary {
    pub fn infeasible(tags: &DietTags) -> Self {
        Self {
            tags: tags.joined(),
            runs: 0,
            mean_adherence: 0.0,
            min_adherence: 0.0,
            max_adherence: 0.0,
            mean_entries_per_meal: 0.0,
            sparse_meals: 0,
            infeasible: true,
        }
    }

    pub fn from_runs(tags: &DietTags, runs: &[RunMetrics]) -> Self {
        if runs.is_empty() {
            return Self::infeasible(tags);
        }
        let n = runs.len() as f64;
        let adherence = runs.iter().map(|r| r.adherence);
        Self {
            tags: tags.joined(),
            runs: runs.len(),
            mean_adherence: runs.iter().map(|r| r.adherence).sum::<f64>() / n,
            min_adherence: adherence.clone().fold(f64::INFINITY, f64::min),
            max_adherence: adherence.fold(f64::NEG_INFINITY, f64::max),
            mean_entries_per_meal: runs.iter().map(RunMetrics::entries_per_meal).sum::<f64>() / n,
            sparse_meals: runs.iter().map(|r| r.sparse_meals).sum(),
            infeasible: false,
        }
    }

    /// Ranking order: feasible first, then mean adherence, then min adherence.
    /// Higher is better.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        match other.infeasible.cmp(&self.infeasible) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.mean_adherence.partial_cmp(&other.mean_adherence) {
            Some(Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        self.min_adherence
            .partial_cmp(&other.min_adherence)
            .unwrap_or(Ordering::Equal)
    }
}

/// Generate one plan with a fixed seed and measure it.
///
/// Returns `Ok(None)` when the restrictions empty the catalog.
pub fn evaluate_run(
    planner: &MealPlanner<'_>,
    request: &MealPlanRequest,
    seed: u64,
) -> Result<Option<RunMetrics>> {
    let mut rng = StdRng::seed_from_u64(seed);
    match planner.generate_plan(request, &mut rng) {
        Ok(plan) => Ok(Some(RunMetrics::from_plan(&request.diet_tags, seed, &plan))),
        Err(DietError::EmptyCatalog) => Ok(None),
        Err(e) => Err(e),
    }
}
