use crate::models::{ActivityLevel, Goal, MacroRatios, MealSlot};

// ─────────────────────────────────────────────────────────────────────────────
// Energy targets
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor sex offsets (kcal/day).
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Factor used when an activity level cannot be resolved (moderate).
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.55;

/// Calorie adjustment used when a goal cannot be resolved (maintain).
pub const DEFAULT_GOAL_ADJUSTMENT: f64 = 0.0;

/// Atwater factors (kcal per gram).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Fractional calorie adjustment applied to TDEE.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::Cut => -0.20,
        Goal::Maintain => 0.0,
        Goal::Bulk => 0.15,
    }
}

/// Macro split for a goal. Carbs take whatever protein and fat leave.
pub fn macro_ratios(goal: Goal) -> MacroRatios {
    let (protein, fat) = match goal {
        Goal::Cut => (0.35, 0.25),
        Goal::Bulk => (0.25, 0.25),
        Goal::Maintain => (0.30, 0.25),
    };
    MacroRatios {
        protein,
        fat,
        carbs: 1.0 - protein - fat,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog filter keyword heuristics
// ─────────────────────────────────────────────────────────────────────────────

pub const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "yogurt", "cottage"];
pub const NON_HALAL_KEYWORDS: &[&str] = &["pork", "bacon", "ham"];
pub const MEAT_KEYWORDS: &[&str] = &["beef", "chicken", "turkey", "lamb"];

// ─────────────────────────────────────────────────────────────────────────────
// Meal assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Per-100g thresholds that place a food in a selection category.
pub const PROTEIN_SOURCE_MIN_PROTEIN: f64 = 10.0;
pub const CARB_SOURCE_MIN_CARBS: f64 = 15.0;
pub const FAT_SOURCE_MIN_FAT: f64 = 8.0;
pub const VEGETABLE_MAX_CARBS: f64 = 10.0;
pub const VEGETABLE_MAX_PROTEIN: f64 = 5.0;

/// Share of the meal's protein target the protein source should cover.
pub const PROTEIN_SOURCE_SHARE: f64 = 0.75;

/// Remaining need below which the carb/fat phases are skipped (grams).
pub const CARB_GAP_MIN: f64 = 10.0;
pub const FAT_GAP_MIN: f64 = 5.0;

/// Portion clamps (grams).
pub const PROTEIN_AMOUNT_RANGE: (f64, f64) = (50.0, 150.0);
pub const CARB_AMOUNT_RANGE: (f64, f64) = (50.0, 200.0);
pub const FAT_AMOUNT_RANGE: (f64, f64) = (20.0, 100.0);
pub const VEGETABLE_AMOUNT_RANGE: (u32, u32) = (50, 150);

/// Vegetables are only added while the meal has fewer entries than this.
pub const MAX_ENTRIES_BEFORE_VEGETABLE: usize = 4;

/// Fraction of the daily targets assigned to a meal.
pub fn meal_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.25,
        MealSlot::Lunch => 0.35,
        MealSlot::Dinner => 0.40,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plan limits
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_PLAN_DAYS: u32 = 1;
pub const MAX_PLAN_DAYS: u32 = 14;
pub const DEFAULT_PLAN_DAYS: u32 = 7;
