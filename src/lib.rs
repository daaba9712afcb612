pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod sweep;

pub use catalog::Catalog;
pub use error::{DietError, Result};
pub use models::{
    BodyProfile, DietTags, EnergyReport, FoodCatalogItem, MealPlanRequest, NutrientTargets, Plan,
};
pub use planner::MealPlanner;
