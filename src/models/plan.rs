use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::models::food::{FoodCatalogItem, NutrientProfile};
use crate::planner::validation::round1;

/// Summed calories and macros of a meal, day, or plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl NutrientTotals {
    pub fn rounded(&self) -> Self {
        Self {
            calories: round1(self.calories),
            protein: round1(self.protein),
            fat: round1(self.fat),
            carbs: round1(self.carbs),
        }
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), Add::add)
    }
}

impl From<NutrientProfile> for NutrientTotals {
    fn from(p: NutrientProfile) -> Self {
        Self {
            calories: p.calories,
            protein: p.protein,
            fat: p.fat,
            carbs: p.carbs,
        }
    }
}

/// One food placed into a meal at a specific amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFoodEntry {
    pub name: String,
    pub amount_g: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl SelectedFoodEntry {
    /// Scale `item` to `amount_g`, rounding every reported value to one decimal.
    pub fn from_item(item: &FoodCatalogItem, amount_g: f64) -> Self {
        let scaled = item.per_100g.scaled(amount_g);
        Self {
            name: item.name.clone(),
            amount_g: round1(amount_g),
            calories: round1(scaled.calories),
            protein: round1(scaled.protein),
            fat: round1(scaled.fat),
            carbs: round1(scaled.carbs),
        }
    }

    pub fn nutrients(&self) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
        }
    }
}

/// The three daily meal slots and their share of the day's targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: MealSlot,
    pub foods: Vec<SelectedFoodEntry>,
    pub totals: NutrientTotals,
}

impl Meal {
    /// Build a meal whose totals are the sum of its (already rounded) entries.
    pub fn new(name: MealSlot, foods: Vec<SelectedFoodEntry>) -> Self {
        let totals = foods
            .iter()
            .map(SelectedFoodEntry::nutrients)
            .sum::<NutrientTotals>()
            .rounded();
        Self {
            name,
            foods,
            totals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index.
    pub day: u32,
    pub meals: Vec<Meal>,
    pub daily_totals: NutrientTotals,
}

impl DayPlan {
    pub fn new(day: u32, meals: Vec<Meal>) -> Self {
        let daily_totals = meals.iter().map(|m| m.totals).sum::<NutrientTotals>().rounded();
        Self {
            day,
            meals,
            daily_totals,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.meals.iter().map(|m| m.foods.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub avg_daily_calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub days: Vec<DayPlan>,
    pub plan_totals: PlanTotals,
    /// Closeness of the plan's totals to its targets, in [0, 1].
    pub adherence_score: f64,
}

impl Plan {
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flat_map(|d| d.meals.iter())
    }

    pub fn entries(&self) -> impl Iterator<Item = &SelectedFoodEntry> {
        self.meals().flat_map(|m| m.foods.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> SelectedFoodEntry {
        SelectedFoodEntry {
            name: name.to_string(),
            amount_g: 100.0,
            calories,
            protein,
            fat,
            carbs,
        }
    }

    #[test]
    fn test_meal_totals_sum_entries() {
        let meal = Meal::new(
            MealSlot::Lunch,
            vec![entry("A", 100.1, 10.2, 1.1, 0.0), entry("B", 200.2, 0.1, 2.2, 30.3)],
        );
        assert_eq!(meal.totals.calories, 300.3);
        assert_eq!(meal.totals.protein, 10.3);
        assert_eq!(meal.totals.fat, 3.3);
        assert_eq!(meal.totals.carbs, 30.3);
    }

    #[test]
    fn test_empty_meal_has_zero_totals() {
        let meal = Meal::new(MealSlot::Breakfast, Vec::new());
        assert_eq!(meal.totals, NutrientTotals::default());
    }

    #[test]
    fn test_day_totals_sum_meals() {
        let meals = MealSlot::ALL
            .into_iter()
            .map(|slot| Meal::new(slot, vec![entry("A", 100.0, 10.0, 5.0, 20.0)]))
            .collect();
        let day = DayPlan::new(1, meals);
        assert_eq!(day.daily_totals.calories, 300.0);
        assert_eq!(day.entry_count(), 3);
    }

    #[test]
    fn test_meal_slot_serializes_capitalised() {
        assert_eq!(serde_json::to_string(&MealSlot::Dinner).unwrap(), "\"Dinner\"");
    }
}
