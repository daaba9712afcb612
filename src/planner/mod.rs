pub mod aggregate;
pub mod assembler;
pub mod constants;
pub mod energy;
pub mod filter;
pub mod validation;

pub use aggregate::{adherence_score, plan_day, plan_days};
pub use assembler::{assemble_meal, MealCategories};
pub use constants::*;
pub use energy::{
    calculate_bmr, compute_targets, lookup_activity_factor, lookup_goal_adjustment,
    lookup_macro_ratios, macro_targets, split_macros,
};
pub use filter::{filter_foods, is_compatible};

use rand::Rng;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{DietError, Result};
use crate::models::{BodyProfile, DietOption, DietTags, EnergyReport, FoodCatalogItem, MealPlanRequest, Plan};

/// Entry point for target computation and plan generation over one catalog.
///
/// The planner only borrows the catalog; every call builds its own working
/// state, so a single planner can serve concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct MealPlanner<'c> {
    catalog: &'c Catalog,
}

impl<'c> MealPlanner<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Validate a profile and compute its daily targets.
    pub fn compute_targets(&self, profile: &BodyProfile) -> Result<EnergyReport> {
        profile.validate()?;
        Ok(compute_targets(profile))
    }

    /// Catalog items compatible with `tags`, in catalog order.
    pub fn available_foods(&self, tags: &DietTags) -> Vec<&'c FoodCatalogItem> {
        for tag in tags.unknown() {
            match DietOption::suggest(tag) {
                Some(known) => warn!(tag, suggestion = known, "unknown diet tag ignored"),
                None => warn!(tag, "unknown diet tag ignored"),
            }
        }
        filter_foods(self.catalog.items(), tags)
    }

    /// Generate a multi-day plan.
    ///
    /// Fails with a validation error for out-of-range input and with
    /// [`DietError::EmptyCatalog`] when the restrictions leave no food; no
    /// partial plan is returned in either case.
    pub fn generate_plan<R: Rng + ?Sized>(
        &self,
        request: &MealPlanRequest,
        rng: &mut R,
    ) -> Result<Plan> {
        request.validate()?;

        let foods = self.available_foods(&request.diet_tags);
        if foods.is_empty() {
            return Err(DietError::EmptyCatalog);
        }
        info!(
            foods = foods.len(),
            days = request.days,
            tags = %request.diet_tags.joined(),
            "generating meal plan"
        );

        let categories = MealCategories::from_foods(&foods);
        if categories.is_empty() {
            warn!(
                foods = foods.len(),
                "no compatible food fits a meal category, meals will be empty"
            );
        }
        Ok(plan_days(request.days, &request.targets, &categories, rng))
    }
}
