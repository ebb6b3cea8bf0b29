use serde::{Deserialize, Deserializer, Serialize};
use strsim::jaro_winkler;

use crate::models::UserProfile;

/// Day label of a daily plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Resolve loosely typed input such as "tue" or "wensday".
    ///
    /// Unambiguous prefixes win; otherwise the closest name above 0.8
    /// Jaro-Winkler similarity.
    pub fn from_fuzzy(input: &str) -> Option<Weekday> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }

        let prefixed: Vec<Weekday> = Self::ALL
            .into_iter()
            .filter(|d| d.name().to_lowercase().starts_with(&input))
            .collect();
        if prefixed.len() == 1 {
            return Some(prefixed[0]);
        }

        Self::ALL
            .into_iter()
            .map(|d| (d, jaro_winkler(&d.name().to_lowercase(), &input)))
            .filter(|(_, score)| *score > 0.8)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(d, _)| d)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroNutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroNutrients {
    pub fn is_non_negative(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub prep_time: String,
    pub cook_time: String,
    #[serde(deserialize_with = "deserialize_servings")]
    pub servings: u32,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSubstitution {
    pub original: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub time: String,
    pub description: String,
    pub macros: MacroNutrients,
    pub recipe: Recipe,
    pub image_search_term: String,
    pub ingredient_substitutions: Vec<IngredientSubstitution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub day: Weekday,
    pub meals: Vec<Meal>,
    pub daily_totals: MacroNutrients,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAverages {
    pub macros: MacroNutrients,
    pub estimated_cost: f64,
}

/// A complete weekly plan as returned by the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    pub weekly_plan: Vec<DailyPlan>,
    pub weekly_averages: WeeklyAverages,
    pub currency: String,
}

impl DietPlan {
    pub fn day(&self, day: Weekday) -> Option<&DailyPlan> {
        self.weekly_plan.iter().find(|d| d.day == day)
    }

    pub fn meal_count(&self) -> usize {
        self.weekly_plan.iter().map(|d| d.meals.len()).sum()
    }

    /// Plan-level contracts the model was asked to honour but that the type
    /// cannot enforce. Empty when the plan is well-formed.
    pub fn warnings(&self, profile: Option<&UserProfile>) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.weekly_plan.len() != Weekday::ALL.len() {
            warnings.push(format!(
                "plan has {} days instead of {}",
                self.weekly_plan.len(),
                Weekday::ALL.len()
            ));
        }

        for day in Weekday::ALL {
            let count = self.weekly_plan.iter().filter(|d| d.day == day).count();
            if count > 1 {
                warnings.push(format!("{} appears {} times", day, count));
            }
        }

        for daily in &self.weekly_plan {
            if !daily.daily_totals.is_non_negative() {
                warnings.push(format!("{} has negative daily totals", daily.day));
            }
            for meal in &daily.meals {
                if !meal.macros.is_non_negative() {
                    warnings.push(format!(
                        "{} / {} has negative macros",
                        daily.day, meal.name
                    ));
                }
                if meal.recipe.servings == 0 {
                    warnings.push(format!("{} / {} has zero servings", daily.day, meal.name));
                }
            }
        }

        if !self.weekly_averages.macros.is_non_negative() {
            warnings.push("weekly averages contain negative macros".to_string());
        }

        if let Some(profile) = profile {
            if profile.has_medical_conditions()
                && self.disclaimer.as_deref().is_none_or(|d| d.trim().is_empty())
            {
                warnings.push("medical conditions were given but no disclaimer".to_string());
            }
            if !self.currency.eq_ignore_ascii_case(profile.currency.trim()) {
                warnings.push(format!(
                    "plan currency {} differs from requested {}",
                    self.currency, profile.currency
                ));
            }
        }

        warnings
    }
}

/// Accept `2` as well as `2.0`; the model's schema only knows NUMBER.
fn deserialize_servings<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
        return Err(D::Error::custom(format!(
            "servings must be a positive whole number, got {}",
            value
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Budget, Gender, Goal};

    fn sample_meal() -> Meal {
        Meal {
            name: "Breakfast".to_string(),
            time: "8:00 AM".to_string(),
            description: "Poha with peanuts".to_string(),
            macros: MacroNutrients {
                calories: 350.0,
                protein: 9.0,
                carbs: 55.0,
                fat: 10.0,
            },
            recipe: Recipe {
                prep_time: "10 min".to_string(),
                cook_time: "15 min".to_string(),
                servings: 2,
                steps: vec![
                    "Rinse poha".to_string(),
                    "Temper spices".to_string(),
                    "Mix and steam".to_string(),
                ],
            },
            image_search_term: "plate of poha with peanuts".to_string(),
            ingredient_substitutions: vec![IngredientSubstitution {
                original: "peanuts".to_string(),
                suggestions: vec!["cashews".to_string(), "roasted chana".to_string()],
            }],
        }
    }

    fn sample_plan() -> DietPlan {
        DietPlan {
            disclaimer: None,
            weekly_plan: Weekday::ALL
                .into_iter()
                .map(|day| DailyPlan {
                    day,
                    meals: vec![sample_meal()],
                    daily_totals: sample_meal().macros,
                    estimated_cost: 120.0,
                })
                .collect(),
            weekly_averages: WeeklyAverages {
                macros: sample_meal().macros,
                estimated_cost: 120.0,
            },
            currency: "INR".to_string(),
        }
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 50,
            gender: Gender::Male,
            weight: 82.0,
            height: 172.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::MaintainWeight,
            allergies: String::new(),
            preferences: String::new(),
            medical_conditions: "hypertension".to_string(),
            region: "India".to_string(),
            budget: Budget::Middle,
            currency: "INR".to_string(),
        }
    }

    #[test]
    fn test_weekday_fuzzy() {
        assert_eq!(Weekday::from_fuzzy("tue"), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_fuzzy("Sunday"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_fuzzy("wensday"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_fuzzy("xyz"), None);
        assert_eq!(Weekday::from_fuzzy(""), None);
    }

    #[test]
    fn test_servings_accepts_integral_float() {
        let json = r#"{"prepTime": "5 min", "cookTime": "0 min", "servings": 2.0, "steps": []}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, 2);
    }

    #[test]
    fn test_servings_rejects_fraction_and_zero() {
        let half = r#"{"prepTime": "5 min", "cookTime": "0 min", "servings": 1.5, "steps": []}"#;
        let zero = r#"{"prepTime": "5 min", "cookTime": "0 min", "servings": 0, "steps": []}"#;
        assert!(serde_json::from_str::<Recipe>(half).is_err());
        assert!(serde_json::from_str::<Recipe>(zero).is_err());
    }

    #[test]
    fn test_unknown_day_is_rejected() {
        let json = r#"{"day": "Funday", "meals": [],
            "dailyTotals": {"calories": 0, "protein": 0, "carbs": 0, "fat": 0},
            "estimatedCost": 0}"#;
        assert!(serde_json::from_str::<DailyPlan>(json).is_err());
    }

    #[test]
    fn test_well_formed_plan_has_no_warnings() {
        let plan = sample_plan();
        assert!(plan.warnings(None).is_empty());
        assert_eq!(plan.meal_count(), 7);
        assert!(plan.day(Weekday::Friday).is_some());
    }

    #[test]
    fn test_warnings_for_short_plan_and_missing_disclaimer() {
        let mut plan = sample_plan();
        plan.weekly_plan.truncate(5);
        plan.weekly_plan[0].meals[0].macros.fat = -1.0;

        let warnings = plan.warnings(Some(&sample_profile()));
        assert!(warnings.iter().any(|w| w.contains("5 days")));
        assert!(warnings.iter().any(|w| w.contains("negative macros")));
        assert!(warnings.iter().any(|w| w.contains("disclaimer")));
    }

    #[test]
    fn test_disclaimer_satisfies_medical_profile() {
        let mut plan = sample_plan();
        plan.disclaimer = Some("Consult your doctor.".to_string());
        assert!(plan.warnings(Some(&sample_profile())).is_empty());
    }

    #[test]
    fn test_disclaimer_omitted_when_absent() {
        let json = serde_json::to_value(sample_plan()).unwrap();
        assert!(json.get("disclaimer").is_none());
        assert!(json["weeklyPlan"][0]["meals"][0]["imageSearchTerm"].is_string());
    }
}
