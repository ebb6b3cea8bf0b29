use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, Budget, Gender, Goal, UserProfile};

/// Parse a strictly positive number typed by the user.
pub fn parse_positive<T>(input: &str, field: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    let value: T = input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("{} must be a number", field)))?;

    if value <= T::default() {
        return Err(DietError::InvalidInput(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(value)
}

fn prompt_number<T>(prompt: &str, default: &str, field: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_positive(&input, field)
}

fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    match default {
        Some(value) => input = input.default(value.to_string()),
        None => input = input.allow_empty(true),
    }
    Ok(input.interact_text()?.trim().to_string())
}

fn prompt_choice<T: Copy>(
    prompt: &str,
    options: &[T],
    label: fn(T) -> &'static str,
    default: usize,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|o| label(*o)).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through the profile form.
pub fn collect_profile() -> Result<UserProfile> {
    let age = prompt_number("Age", "30", "Age")?;
    let gender = prompt_choice("Gender", &Gender::ALL, Gender::label, 0)?;
    let weight = prompt_number("Weight (kg)", "70", "Weight")?;
    let height = prompt_number("Height (cm)", "170", "Height")?;
    let activity_level = prompt_choice(
        "Activity level",
        &ActivityLevel::ALL,
        ActivityLevel::label,
        1,
    )?;
    let goal = prompt_choice("Goal", &Goal::ALL, Goal::label, 0)?;
    let allergies = prompt_text("Allergies (comma-separated, optional)", None)?;
    let preferences = prompt_text(
        "Dietary preferences, religious or ethical (optional)",
        None,
    )?;
    let medical_conditions = prompt_text("Medical conditions (optional)", None)?;
    let region = prompt_text("Region / location", Some("India"))?;
    let budget = prompt_choice("Budget tier", &Budget::ALL, Budget::label, 2)?;
    let currency = prompt_text("Currency code for cost estimates", Some("INR"))?.to_uppercase();

    Ok(UserProfile {
        age,
        gender,
        weight,
        height,
        activity_level,
        goal,
        allergies,
        preferences,
        medical_conditions,
        region,
        budget,
        currency,
    })
}
