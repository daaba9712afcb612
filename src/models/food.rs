use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Relative price bracket of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostLevel {
    Low,
    Medium,
    High,
}

impl CostLevel {
    /// Whether this item is allowed under the `budget` restriction.
    #[inline]
    pub fn is_budget_friendly(&self) -> bool {
        matches!(self, CostLevel::Low | CostLevel::Medium)
    }
}

impl fmt::Display for CostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CostLevel::Low => "low",
            CostLevel::Medium => "medium",
            CostLevel::High => "high",
        })
    }
}

/// Nutrient values per 100 g of a food.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl NutrientProfile {
    /// Linearly scale the per-100g reference to `amount_g` grams.
    #[inline]
    pub fn scaled(&self, amount_g: f64) -> NutrientProfile {
        let factor = amount_g / 100.0;
        NutrientProfile {
            calories: self.calories * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.fat, self.carbs]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A read-only entry of the food catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalogItem {
    pub id: String,
    pub name: String,
    pub per_100g: NutrientProfile,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub cost_level: CostLevel,
}

impl FoodCatalogItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Case-insensitive check of the name against a keyword list.
    pub fn name_contains_any(&self, keywords: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        keywords.iter().any(|k| name.contains(k))
    }

    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty() && self.per_100g.is_valid()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} kcal, P:{} F:{} C:{}, cost:{}",
            self.name,
            self.id,
            self.per_100g.calories,
            self.per_100g.protein,
            self.per_100g.fat,
            self.per_100g.carbs,
            self.cost_level
        )
    }
}
