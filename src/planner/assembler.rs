//! Greedy single-meal assembly.
//!
//! A meal is built in four phases: a protein source scaled toward the
//! protein target, a carb source closing the carb gap, a fat source closing
//! the fat gap, and a vegetable portion for volume. Each phase is skipped when
//! its category is empty, so a meal may fall short of its targets; that
//! shortfall only shows up in the plan's adherence score.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::models::{FoodCatalogItem, Meal, MealSlot, NutrientTargets, NutrientTotals, SelectedFoodEntry};
use crate::planner::constants::*;

/// Filtered catalog split into the four selection categories.
///
/// A food can belong to more than one category.
#[derive(Debug, Default)]
pub struct MealCategories<'a> {
    pub protein: Vec<&'a FoodCatalogItem>,
    pub carb: Vec<&'a FoodCatalogItem>,
    pub fat: Vec<&'a FoodCatalogItem>,
    pub vegetable: Vec<&'a FoodCatalogItem>,
}

impl<'a> MealCategories<'a> {
    pub fn from_foods(foods: &[&'a FoodCatalogItem]) -> Self {
        let pick = |pred: fn(&FoodCatalogItem) -> bool| -> Vec<&'a FoodCatalogItem> {
            foods.iter().copied().filter(|f| pred(f)).collect()
        };
        Self {
            protein: pick(is_protein_source),
            carb: pick(is_carb_source),
            fat: pick(is_fat_source),
            vegetable: pick(is_vegetable),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.protein.is_empty()
            && self.carb.is_empty()
            && self.fat.is_empty()
            && self.vegetable.is_empty()
    }
}

pub fn is_protein_source(food: &FoodCatalogItem) -> bool {
    food.per_100g.protein > PROTEIN_SOURCE_MIN_PROTEIN
}

pub fn is_carb_source(food: &FoodCatalogItem) -> bool {
    food.per_100g.carbs > CARB_SOURCE_MIN_CARBS
}

pub fn is_fat_source(food: &FoodCatalogItem) -> bool {
    food.per_100g.fat > FAT_SOURCE_MIN_FAT
}

pub fn is_vegetable(food: &FoodCatalogItem) -> bool {
    food.per_100g.carbs < VEGETABLE_MAX_CARBS && food.per_100g.protein < VEGETABLE_MAX_PROTEIN
}

/// Grams of `per_100g_value`-dense food needed to supply `needed` grams, clamped.
fn portion_for(needed: f64, per_100g_value: f64, (min, max): (f64, f64)) -> f64 {
    (needed / per_100g_value * 100.0).clamp(min, max)
}

/// Working state of one meal under construction.
///
/// The running totals are unrounded; phase decisions read them, while the
/// reported entries carry rounded values.
struct MealBuilder {
    entries: Vec<SelectedFoodEntry>,
    running: NutrientTotals,
}

impl MealBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::with_capacity(4),
            running: NutrientTotals::default(),
        }
    }

    fn add(&mut self, food: &FoodCatalogItem, amount_g: f64) {
        trace!(food = %food.debug_string(), amount_g, "adding food to meal");
        self.running = self.running + NutrientTotals::from(food.per_100g.scaled(amount_g));
        self.entries.push(SelectedFoodEntry::from_item(food, amount_g));
    }

    fn finish(self, slot: MealSlot) -> Meal {
        Meal::new(slot, self.entries)
    }
}

/// Assemble one meal toward `targets` from the categorised catalog.
pub fn assemble_meal<R: Rng + ?Sized>(
    slot: MealSlot,
    targets: &NutrientTargets,
    categories: &MealCategories<'_>,
    rng: &mut R,
) -> Meal {
    let mut meal = MealBuilder::new();

    // Protein
    match categories.protein.choose(rng) {
        Some(food) => {
            let amount = portion_for(
                targets.protein_g * PROTEIN_SOURCE_SHARE,
                food.per_100g.protein,
                PROTEIN_AMOUNT_RANGE,
            );
            meal.add(food, amount);
        }
        None => debug!(meal = %slot, "no protein source available, skipping protein phase"),
    }

    // Carbs
    let carb_gap = targets.carbs_g - meal.running.carbs;
    if carb_gap > CARB_GAP_MIN {
        match categories.carb.choose(rng) {
            Some(food) => {
                let amount = portion_for(carb_gap, food.per_100g.carbs, CARB_AMOUNT_RANGE);
                meal.add(food, amount);
            }
            None => debug!(meal = %slot, carb_gap, "no carb source available, skipping carb phase"),
        }
    }

    // Fat
    let fat_gap = targets.fat_g - meal.running.fat;
    if fat_gap > FAT_GAP_MIN {
        match categories.fat.choose(rng) {
            Some(food) => {
                let amount = portion_for(fat_gap, food.per_100g.fat, FAT_AMOUNT_RANGE);
                meal.add(food, amount);
            }
            None => debug!(meal = %slot, fat_gap, "no fat source available, skipping fat phase"),
        }
    }

    // Vegetables, for volume rather than macros
    if meal.entries.len() < MAX_ENTRIES_BEFORE_VEGETABLE {
        if let Some(food) = categories.vegetable.choose(rng) {
            let (min, max) = VEGETABLE_AMOUNT_RANGE;
            let amount = rng.gen_range(min..=max);
            meal.add(food, f64::from(amount));
        }
    }

    meal.finish(slot)
}
