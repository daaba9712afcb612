use rand::Rng;
use tracing::debug;

use crate::models::{DayPlan, MealSlot, NutrientTargets, NutrientTotals, Plan, PlanTotals};
use crate::planner::assembler::{assemble_meal, MealCategories};
use crate::planner::constants::meal_share;
use crate::planner::validation::{round1, round_to};

/// Build one day: the daily targets are split across the three meal slots.
pub fn plan_day<R: Rng + ?Sized>(
    day: u32,
    daily: &NutrientTargets,
    categories: &MealCategories<'_>,
    rng: &mut R,
) -> DayPlan {
    let meals = MealSlot::ALL
        .into_iter()
        .map(|slot| assemble_meal(slot, &daily.scaled(meal_share(slot)), categories, rng))
        .collect();
    DayPlan::new(day, meals)
}

/// Build `days` independent days and score the result against the targets.
pub fn plan_days<R: Rng + ?Sized>(
    days: u32,
    daily: &NutrientTargets,
    categories: &MealCategories<'_>,
    rng: &mut R,
) -> Plan {
    let day_plans: Vec<DayPlan> = (1..=days)
        .map(|day| plan_day(day, daily, categories, rng))
        .collect();

    let total: NutrientTotals = day_plans.iter().map(|d| d.daily_totals).sum();
    let adherence_score = adherence_score(&total, daily, days);

    let plan_totals = PlanTotals {
        calories: round1(total.calories),
        protein: round1(total.protein),
        fat: round1(total.fat),
        carbs: round1(total.carbs),
        avg_daily_calories: if days > 0 {
            round1(total.calories / f64::from(days))
        } else {
            0.0
        },
    };

    debug!(
        days,
        total_calories = plan_totals.calories,
        adherence_score,
        "plan assembled"
    );

    Plan {
        days: day_plans,
        plan_totals,
        adherence_score,
    }
}

/// Closeness of `actual` to `days` worth of `daily` targets.
///
/// Averages `1 - |actual - target| / target` over calories, protein, fat and
/// carbs, clamps to [0, 1] and rounds to three decimals.
pub fn adherence_score(actual: &NutrientTotals, daily: &NutrientTargets, days: u32) -> f64 {
    let target = daily.scaled(f64::from(days));
    let parts = [
        nutrient_adherence(actual.calories, target.target_calories),
        nutrient_adherence(actual.protein, target.protein_g),
        nutrient_adherence(actual.fat, target.fat_g),
        nutrient_adherence(actual.carbs, target.carbs_g),
    ];
    let mean = parts.iter().sum::<f64>() / parts.len() as f64;
    round_to(mean.clamp(0.0, 1.0), 3)
}

/// Adherence for one nutrient. A zero target is met only by a zero total.
fn nutrient_adherence(actual: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return if actual <= 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - (actual - target).abs() / target
}
