use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::diet::DietTags;
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::planner::validation::{check_days, check_range, round1};

/// Daily energy and macronutrient targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTargets {
    pub target_calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl NutrientTargets {
    pub fn new(target_calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64) -> Self {
        Self {
            target_calories,
            protein_g,
            fat_g,
            carbs_g,
        }
    }

    /// Multiply every field by the same factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            target_calories: self.target_calories * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbs_g: self.carbs_g * factor,
        }
    }

    pub fn rounded(&self) -> Self {
        Self {
            target_calories: round1(self.target_calories),
            protein_g: round1(self.protein_g),
            fat_g: round1(self.fat_g),
            carbs_g: round1(self.carbs_g),
        }
    }

    /// Share of calories coming from each macro, as percentages.
    pub fn macro_percentages(&self) -> MacroRatios {
        if self.target_calories <= 0.0 {
            return MacroRatios::default();
        }
        MacroRatios {
            protein: self.protein_g * KCAL_PER_G_PROTEIN / self.target_calories * 100.0,
            fat: self.fat_g * KCAL_PER_G_FAT / self.target_calories * 100.0,
            carbs: self.carbs_g * KCAL_PER_G_CARBS / self.target_calories * 100.0,
        }
    }

    /// Range checks applied to meal plan requests.
    pub fn validate(&self) -> Result<()> {
        check_range("calories", self.target_calories, 800.0, 6000.0)?;
        check_range("protein_g", self.protein_g, 50.0, 400.0)?;
        check_range("fat_g", self.fat_g, 20.0, 200.0)?;
        check_range("carbs_g", self.carbs_g, 50.0, 800.0)?;
        Ok(())
    }
}

/// Fractions of calories assigned to protein, fat and carbohydrate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroRatios {
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Full result of the energy target calculation.
///
/// Values are kept at full precision; call [`EnergyReport::rounded`] at the
/// output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    pub bmr: f64,
    pub activity_factor: f64,
    pub tdee: f64,
    pub ratios: MacroRatios,
    pub targets: NutrientTargets,
}

impl EnergyReport {
    pub fn rounded(&self) -> Self {
        Self {
            bmr: round1(self.bmr),
            activity_factor: self.activity_factor,
            tdee: round1(self.tdee),
            ratios: self.ratios,
            targets: self.targets.rounded(),
        }
    }
}

/// Input to plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    pub targets: NutrientTargets,
    #[serde(default)]
    pub diet_tags: DietTags,
    pub days: u32,
}

impl MealPlanRequest {
    pub fn new(targets: NutrientTargets, diet_tags: DietTags, days: u32) -> Self {
        Self {
            targets,
            diet_tags,
            days,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.targets.validate()?;
        check_days(self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DietError;

    #[test]
    fn test_validate_bounds() {
        let ok = NutrientTargets::new(2000.0, 150.0, 67.0, 200.0);
        assert!(ok.validate().is_ok());

        let low_cal = NutrientTargets::new(799.0, 150.0, 67.0, 200.0);
        assert!(matches!(low_cal.validate(), Err(DietError::Validation(_))));

        let high_fat = NutrientTargets::new(2000.0, 150.0, 201.0, 200.0);
        assert!(high_fat.validate().is_err());
    }

    #[test]
    fn test_request_days_bounds() {
        let targets = NutrientTargets::new(2000.0, 150.0, 67.0, 200.0);
        assert!(MealPlanRequest::new(targets, DietTags::default(), 1).validate().is_ok());
        assert!(MealPlanRequest::new(targets, DietTags::default(), 14).validate().is_ok());
        assert!(MealPlanRequest::new(targets, DietTags::default(), 0).validate().is_err());
        assert!(MealPlanRequest::new(targets, DietTags::default(), 15).validate().is_err());
    }

    #[test]
    fn test_macro_percentages() {
        let targets = NutrientTargets::new(2000.0, 150.0, 500.0 / 9.0, 200.0);
        let pct = targets.macro_percentages();
        assert!((pct.protein - 30.0).abs() < 1e-9);
        assert!((pct.fat - 25.0).abs() < 1e-9);
        assert!((pct.carbs - 40.0).abs() < 1e-9);
    }
}
