use std::str::FromStr;

use dialoguer::{Input, Select};

use crate::cli::{PlanArgs, ProfileArgs};
use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, BodyProfile, Goal, NutrientTargets, Sex};

/// Prompt for a number, re-asking until the answer parses.
fn prompt_number<T>(prompt: &str, default: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: ToString,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            s.trim().parse::<T>().map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::validation(format!("Invalid number: {input}")))
}

/// Prompt for one of a fixed set of choices.
fn prompt_choice<T: Copy>(prompt: &str, choices: &[(T, &str)], default: usize) -> Result<T> {
    let labels: Vec<&str> = choices.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(choices[selection].0)
}

/// Use the given value, or ask for it unless prompting is disabled.
fn value_or_prompt<T>(
    value: Option<T>,
    flag: &str,
    no_input: bool,
    prompt: impl FnOnce() -> Result<T>,
) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None if no_input => Err(DietError::validation(format!("missing required --{flag}"))),
        None => prompt(),
    }
}

pub fn prompt_sex() -> Result<Sex> {
    prompt_choice("Sex", &[(Sex::Male, "male"), (Sex::Female, "female")], 0)
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let choices: Vec<(ActivityLevel, &str)> = ActivityLevel::ALL
        .into_iter()
        .map(|level| (level, level.as_str()))
        .collect();
    prompt_choice("Activity level", &choices, 2)
}

pub fn prompt_goal() -> Result<Goal> {
    let choices: Vec<(Goal, &str)> = Goal::ALL.into_iter().map(|g| (g, g.as_str())).collect();
    prompt_choice("Goal", &choices, 1)
}

/// Complete a body profile from flags and prompts, then validate it.
pub fn collect_profile(args: &ProfileArgs, no_input: bool) -> Result<BodyProfile> {
    let sex = value_or_prompt(args.sex, "sex", no_input, prompt_sex)?;
    let age = value_or_prompt(args.age, "age", no_input, || prompt_number("Age (years)", "30"))?;
    let height_cm = value_or_prompt(args.height_cm, "height-cm", no_input, || {
        prompt_number("Height (cm)", "175")
    })?;
    let weight_kg = value_or_prompt(args.weight_kg, "weight-kg", no_input, || {
        prompt_number("Weight (kg)", "70")
    })?;
    let activity_level =
        value_or_prompt(args.activity_level, "activity-level", no_input, prompt_activity_level)?;
    let goal = value_or_prompt(args.goal, "goal", no_input, prompt_goal)?;

    BodyProfile::new(sex, age, height_cm, weight_kg, activity_level, goal)
}

/// Complete daily targets from flags and prompts.
pub fn collect_targets(args: &PlanArgs, no_input: bool) -> Result<NutrientTargets> {
    let calories = value_or_prompt(args.calories, "calories", no_input, || {
        prompt_number("Daily calories", "2000")
    })?;
    let protein_g = value_or_prompt(args.protein_g, "protein-g", no_input, || {
        prompt_number("Daily protein (g)", "150")
    })?;
    let fat_g = value_or_prompt(args.fat_g, "fat-g", no_input, || {
        prompt_number("Daily fat (g)", "67")
    })?;
    let carbs_g = value_or_prompt(args.carbs_g, "carbs-g", no_input, || {
        prompt_number("Daily carbs (g)", "200")
    })?;

    Ok(NutrientTargets::new(calories, protein_g, fat_g, carbs_g))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_flags_need_no_prompt() {
        let args = ProfileArgs {
            sex: Some(Sex::Male),
            age: Some(30),
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            activity_level: Some(ActivityLevel::Moderate),
            goal: Some(Goal::Cut),
        };
        let profile = collect_profile(&args, true).unwrap();
        assert_eq!(profile.age, 30);
    }

    #[test]
    fn test_missing_flag_without_input_is_validation_error() {
        let args = ProfileArgs {
            sex: Some(Sex::Male),
            ..Default::default()
        };
        let err = collect_profile(&args, true).unwrap_err();
        assert!(err.to_string().contains("--age"));
    }

    #[test]
    fn test_collect_targets_no_input() {
        let args = PlanArgs {
            calories: Some(2000.0),
            protein_g: Some(150.0),
            fat_g: Some(67.0),
            carbs_g: Some(200.0),
            ..Default::default()
        };
        let targets = collect_targets(&args, true).unwrap();
        assert_eq!(targets.fat_g, 67.0);

        let partial = PlanArgs::default();
        assert!(collect_targets(&partial, true).is_err());
    }
}
