use crate::models::diet::{TAG_BUDGET, TAG_HALAL, TAG_LACTOSE_FREE, TAG_NON_VEG, TAG_VEG, TAG_VEGAN};
use crate::models::{DietTags, FoodCatalogItem};
use crate::planner::constants::{DAIRY_KEYWORDS, MEAT_KEYWORDS, NON_HALAL_KEYWORDS};

/// Reduce a catalog to the items compatible with every requested restriction.
///
/// No tags means no filtering. The result may be empty; callers decide
/// whether that is fatal. Input order is preserved.
pub fn filter_foods<'a, I>(items: I, tags: &DietTags) -> Vec<&'a FoodCatalogItem>
where
    I: IntoIterator<Item = &'a FoodCatalogItem>,
{
    if tags.is_empty() {
        return items.into_iter().collect();
    }

    items
        .into_iter()
        .filter(|item| is_compatible(item, tags))
        .collect()
}

/// Whether a single item passes all applicable rules (AND semantics).
pub fn is_compatible(item: &FoodCatalogItem, tags: &DietTags) -> bool {
    passes_diet_axis(item, tags)
        && passes_lactose_free(item, tags)
        && passes_halal(item, tags)
        && passes_budget(item, tags)
}

/// Vegan / vegetarian / non-vegetarian exclusivity.
///
/// Requesting both `veg` and `non_veg` lifts the restriction on this axis.
fn passes_diet_axis(item: &FoodCatalogItem, tags: &DietTags) -> bool {
    let veg = tags.contains(TAG_VEG);
    let non_veg = tags.contains(TAG_NON_VEG);

    if tags.contains(TAG_VEGAN) {
        item.has_tag(TAG_VEGAN)
    } else if veg && !non_veg {
        item.has_tag(TAG_VEG) || item.has_tag(TAG_VEGAN)
    } else if non_veg && !veg {
        item.has_tag(TAG_NON_VEG)
    } else {
        true
    }
}

/// Dairy is detected by name, not by tag.
fn passes_lactose_free(item: &FoodCatalogItem, tags: &DietTags) -> bool {
    !tags.contains(TAG_LACTOSE_FREE) || !item.name_contains_any(DAIRY_KEYWORDS)
}

/// Forbidden meats are excluded by name; other meats need an explicit halal tag.
fn passes_halal(item: &FoodCatalogItem, tags: &DietTags) -> bool {
    if !tags.contains(TAG_HALAL) {
        return true;
    }
    if item.name_contains_any(NON_HALAL_KEYWORDS) {
        return false;
    }
    !item.name_contains_any(MEAT_KEYWORDS) || item.has_tag(TAG_HALAL)
}

fn passes_budget(item: &FoodCatalogItem, tags: &DietTags) -> bool {
    !tags.contains(TAG_BUDGET) || item.cost_level.is_budget_friendly()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostLevel, NutrientProfile};

    fn item(name: &str, tags: &[&str], cost_level: CostLevel) -> FoodCatalogItem {
        FoodCatalogItem {
            id: name.to_lowercase().replace(' ', "_"),
            name: name.to_string(),
            per_100g: NutrientProfile {
                calories: 100.0,
                protein: 10.0,
                fat: 5.0,
                carbs: 10.0,
            },
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cost_level,
        }
    }

    fn catalog() -> Vec<FoodCatalogItem> {
        vec![
            item("Grilled Chicken Breast", &["non_veg", "halal"], CostLevel::Medium),
            item("Beef Steak", &["non_veg"], CostLevel::High),
            item("Smoked Bacon", &["non_veg", "halal"], CostLevel::Medium),
            item("Extra Firm Tofu", &["veg", "vegan"], CostLevel::Low),
            item("Whole Milk", &["veg"], CostLevel::Low),
            item("Vegan Burger", &["vegan"], CostLevel::High),
            item("Atlantic Cod", &["non_veg"], CostLevel::Medium),
        ]
    }

    fn names(items: &[&FoodCatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    fn tags(list: &[&str]) -> DietTags {
        list.iter().collect()
    }

    #[test]
    fn test_no_tags_returns_everything() {
        let foods = catalog();
        assert_eq!(filter_foods(&foods, &DietTags::new()).len(), foods.len());
    }

    #[test]
    fn test_vegan_requires_vegan_tag() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["vegan"]));
        assert_eq!(names(&result), vec!["Extra Firm Tofu", "Vegan Burger"]);
    }

    #[test]
    fn test_veg_accepts_veg_or_vegan() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["veg"]));
        assert_eq!(names(&result), vec!["Extra Firm Tofu", "Whole Milk", "Vegan Burger"]);
    }

    #[test]
    fn test_non_veg_requires_non_veg_tag() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["non_veg"]));
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|i| i.has_tag("non_veg")));
    }

    #[test]
    fn test_veg_and_non_veg_lifts_axis() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["veg", "non_veg"]));
        assert_eq!(result.len(), foods.len());
    }

    #[test]
    fn test_lactose_free_uses_name() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["lactose_free"]));
        assert!(!names(&result).contains(&"Whole Milk".to_string()));
        assert_eq!(result.len(), foods.len() - 1);
    }

    #[test]
    fn test_halal_rules() {
        let foods = catalog();
        let result = names(&filter_foods(&foods, &tags(&["halal"])));
        // Halal-tagged chicken stays, untagged beef goes, bacon goes despite its tag.
        assert!(result.contains(&"Grilled Chicken Breast".to_string()));
        assert!(!result.contains(&"Beef Steak".to_string()));
        assert!(!result.contains(&"Smoked Bacon".to_string()));
        // Fish carries no meat keyword and needs no halal tag.
        assert!(result.contains(&"Atlantic Cod".to_string()));
    }

    #[test]
    fn test_budget_excludes_high_cost() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["budget"]));
        assert!(result.iter().all(|i| i.cost_level != CostLevel::High));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_rules_combine() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["vegan", "budget"]));
        assert_eq!(names(&result), vec!["Extra Firm Tofu"]);
    }

    #[test]
    fn test_idempotent() {
        let foods = catalog();
        let t = tags(&["veg", "lactose_free", "budget"]);
        let once = filter_foods(&foods, &t);
        let twice = filter_foods(once.iter().copied(), &t);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_tags_do_not_restrict() {
        let foods = catalog();
        let result = filter_foods(&foods, &tags(&["keto"]));
        assert_eq!(result.len(), foods.len());
    }
}
