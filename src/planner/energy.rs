//! Energy targets: BMR, TDEE, goal-adjusted calories and the macro split.

use tracing::debug;

use crate::models::{
    ActivityLevel, BodyProfile, EnergyReport, Goal, MacroRatios, NutrientTargets, Sex,
};
use crate::planner::constants::{
    activity_factor, goal_adjustment, macro_ratios, BMR_FEMALE_OFFSET, BMR_MALE_OFFSET,
    DEFAULT_ACTIVITY_FACTOR, DEFAULT_GOAL_ADJUSTMENT, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN,
};

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn calculate_bmr(sex: Sex, age: u32, height_cm: f64, weight_kg: f64) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset
}

/// Activity factor for free-form text; unrecognised levels fall back to moderate.
pub fn lookup_activity_factor(level: &str) -> f64 {
    level
        .parse::<ActivityLevel>()
        .map(activity_factor)
        .unwrap_or(DEFAULT_ACTIVITY_FACTOR)
}

/// Calorie adjustment for free-form text; unrecognised goals fall back to maintain.
pub fn lookup_goal_adjustment(goal: &str) -> f64 {
    goal.parse::<Goal>()
        .map(goal_adjustment)
        .unwrap_or(DEFAULT_GOAL_ADJUSTMENT)
}

/// Macro ratios for free-form text; unrecognised goals use the maintain split.
pub fn lookup_macro_ratios(goal: &str) -> MacroRatios {
    macro_ratios(goal.parse::<Goal>().unwrap_or(Goal::Maintain))
}

/// Convert a calorie target into macro grams using the given ratios.
pub fn split_macros(target_calories: f64, ratios: MacroRatios) -> NutrientTargets {
    let calories = target_calories.max(0.0);
    NutrientTargets {
        target_calories: calories,
        protein_g: calories * ratios.protein / KCAL_PER_G_PROTEIN,
        fat_g: calories * ratios.fat / KCAL_PER_G_FAT,
        carbs_g: calories * ratios.carbs / KCAL_PER_G_CARBS,
    }
}

/// Macro grams for a calorie target and goal.
pub fn macro_targets(target_calories: f64, goal: Goal) -> NutrientTargets {
    split_macros(target_calories, macro_ratios(goal))
}

/// Compute the full set of daily targets for a validated profile.
///
/// Everything is kept at full precision; rounding happens at the output
/// boundary through [`EnergyReport::rounded`].
pub fn compute_targets(profile: &BodyProfile) -> EnergyReport {
    let bmr = calculate_bmr(profile.sex, profile.age, profile.height_cm, profile.weight_kg);
    let factor = activity_factor(profile.activity_level);
    let tdee = bmr * factor;
    let target_calories = tdee * (1.0 + goal_adjustment(profile.goal));
    let ratios = macro_ratios(profile.goal);
    let targets = split_macros(target_calories, ratios);

    debug!(
        bmr,
        tdee,
        target_calories,
        goal = %profile.goal,
        "computed energy targets"
    );

    EnergyReport {
        bmr,
        activity_factor: factor,
        tdee,
        ratios,
        targets,
    }
}
