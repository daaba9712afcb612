pub mod diet;
pub mod food;
pub mod plan;
pub mod profile;
pub mod targets;

pub use diet::{DietOption, DietTags, DIET_OPTIONS};
pub use food::{CostLevel, FoodCatalogItem, NutrientProfile};
pub use plan::{DayPlan, Meal, MealSlot, NutrientTotals, Plan, PlanTotals, SelectedFoodEntry};
pub use profile::{ActivityLevel, BodyProfile, Goal, Sex};
pub use targets::{EnergyReport, MacroRatios, MealPlanRequest, NutrientTargets};
