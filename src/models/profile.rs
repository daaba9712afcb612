use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::planner::validation::check_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(DietError::validation("Sex must be 'male' or 'female'")),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "male",
            Sex::Female => "female",
        })
    }
}

/// Self-reported activity level, mapped to a TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| {
                DietError::validation(
                    "Activity level must be one of 'sedentary', 'light', 'moderate', 'active', 'very_active'",
                )
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-composition goal driving the calorie adjustment and macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Maintain, Goal::Bulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Bulk => "bulk",
        }
    }
}

impl FromStr for Goal {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == wanted)
            .ok_or_else(|| DietError::validation("Goal must be 'cut', 'maintain', or 'bulk'"))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body stats used to derive energy targets.
///
/// Construct through [`BodyProfile::new`] so the numeric ranges are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl BodyProfile {
    pub fn new(
        sex: Sex,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self> {
        let profile = Self {
            sex,
            age,
            height_cm,
            weight_kg,
            activity_level,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Build a profile from raw text enums, rejecting anything outside the known sets.
    pub fn parse(
        sex: &str,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: &str,
        goal: &str,
    ) -> Result<Self> {
        Self::new(
            sex.parse()?,
            age,
            height_cm,
            weight_kg,
            activity_level.parse()?,
            goal.parse()?,
        )
    }

    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age as f64, 10.0, 120.0)?;
        check_range("height_cm", self.height_cm, 100.0, 250.0)?;
        check_range("weight_kg", self.weight_kg, 30.0, 300.0)?;
        Ok(())
    }
}
