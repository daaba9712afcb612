use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

pub const TAG_VEG: &str = "veg";
pub const TAG_NON_VEG: &str = "non_veg";
pub const TAG_VEGAN: &str = "vegan";
pub const TAG_HALAL: &str = "halal";
pub const TAG_LACTOSE_FREE: &str = "lactose_free";
pub const TAG_BUDGET: &str = "budget";

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The set of dietary restrictions requested for a plan.
///
/// Tags are lowercased and trimmed on insertion; blank tags are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DietTags(BTreeSet<String>);

impl DietTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() {
            self.0.insert(tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tags that no filter rule recognises.
    pub fn unknown(&self) -> Vec<&str> {
        self.iter().filter(|t| DietOption::find(t).is_none()).collect()
    }

    /// Comma-separated form used in logs and CSV output.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(",")
    }
}

impl<S: AsRef<str>> FromIterator<S> for DietTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = DietTags::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for DietTags {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<DietTags> for Vec<String> {
    fn from(tags: DietTags) -> Self {
        tags.0.into_iter().collect()
    }
}

/// A dietary restriction the catalog filter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DietOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

pub static DIET_OPTIONS: [DietOption; 6] = [
    DietOption {
        value: TAG_VEG,
        label: "Vegetarian",
        description: "No meat, fish, or poultry",
        examples: &["tofu", "lentils", "chickpeas", "eggs", "dairy"],
    },
    DietOption {
        value: TAG_NON_VEG,
        label: "Non-Vegetarian",
        description: "Includes meat, fish, and poultry",
        examples: &["chicken", "beef", "fish", "turkey", "eggs"],
    },
    DietOption {
        value: TAG_VEGAN,
        label: "Vegan",
        description: "No animal products",
        examples: &["tofu", "lentils", "chickpeas", "nuts", "seeds"],
    },
    DietOption {
        value: TAG_HALAL,
        label: "Halal",
        description: "Halal dietary requirements",
        examples: &["halal meat", "fish", "dairy", "grains"],
    },
    DietOption {
        value: TAG_LACTOSE_FREE,
        label: "Lactose Free",
        description: "No dairy products",
        examples: &["almond milk", "coconut yogurt", "dairy-free cheese"],
    },
    DietOption {
        value: TAG_BUDGET,
        label: "Budget Friendly",
        description: "Cost-effective food choices",
        examples: &["lentils", "rice", "beans", "frozen vegetables"],
    },
];

impl DietOption {
    pub fn find(value: &str) -> Option<&'static DietOption> {
        DIET_OPTIONS.iter().find(|o| o.value == value)
    }

    /// Closest known tag to a misspelled one, if any is similar enough.
    pub fn suggest(value: &str) -> Option<&'static str> {
        let value = value.to_lowercase();
        DIET_OPTIONS
            .iter()
            .map(|o| (o.value, jaro_winkler(o.value, &value)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(v, _)| v)
    }
}
