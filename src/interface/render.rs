use crate::models::{DailyPlan, DietPlan, MacroNutrients, Meal, Weekday};

fn macros_line(macros: &MacroNutrients) -> String {
    format!(
        "{:.0} kcal | P {:.0}g | C {:.0}g | F {:.0}g",
        macros.calories, macros.protein, macros.carbs, macros.fat
    )
}

fn push_meal(out: &mut String, meal: &Meal) {
    out.push_str(&format!("  {} ({})\n", meal.name, meal.time));
    out.push_str(&format!("    {}\n", meal.description));
    out.push_str(&format!("    {}\n", macros_line(&meal.macros)));
    out.push_str(&format!(
        "    Recipe: prep {}, cook {}, serves {}\n",
        meal.recipe.prep_time, meal.recipe.cook_time, meal.recipe.servings
    ));
    for (i, step) in meal.recipe.steps.iter().enumerate() {
        out.push_str(&format!("      {}. {}\n", i + 1, step));
    }
    out.push_str(&format!("    Photo search: \"{}\"\n", meal.image_search_term));
    for sub in &meal.ingredient_substitutions {
        out.push_str(&format!(
            "    Swap {} -> {}\n",
            sub.original,
            sub.suggestions.join(", ")
        ));
    }
}

fn push_day(out: &mut String, day: &DailyPlan, currency: &str) {
    out.push_str(&format!("=== {} ===\n", day.day));
    for meal in &day.meals {
        push_meal(out, meal);
        out.push('\n');
    }
    out.push_str(&format!("  Daily totals: {}\n", macros_line(&day.daily_totals)));
    out.push_str(&format!(
        "  Estimated cost: ~{:.2} {} (approx.)\n\n",
        day.estimated_cost, currency
    ));
}

/// Format a plan as plain text, optionally restricted to one day.
pub fn render_plan(plan: &DietPlan, summary: &str, only: Option<Weekday>) -> String {
    let mut out = String::new();

    if let Some(disclaimer) = plan.disclaimer.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str(&format!("!! {}\n\n", disclaimer.trim()));
    }

    if !summary.is_empty() {
        out.push_str(&format!("{}\n\n", summary));
    }

    out.push_str("--- Weekly averages ---\n");
    out.push_str(&format!("{}\n", macros_line(&plan.weekly_averages.macros)));
    out.push_str(&format!(
        "Estimated cost per day: ~{:.2} {} (approx.)\n\n",
        plan.weekly_averages.estimated_cost, plan.currency
    ));

    let days: Vec<&DailyPlan> = match only {
        Some(day) => plan.weekly_plan.iter().filter(|d| d.day == day).collect(),
        None => plan.weekly_plan.iter().collect(),
    };

    if days.is_empty() {
        out.push_str("No meals planned.\n");
    }
    for day in days {
        push_day(&mut out, day, &plan.currency);
    }

    out
}

/// Print a plan to stdout.
pub fn display_plan(plan: &DietPlan, summary: &str, only: Option<Weekday>) {
    println!();
    print!("{}", render_plan(plan, summary, only));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientSubstitution, Recipe, WeeklyAverages};

    fn plan() -> DietPlan {
        let macros = MacroNutrients {
            calories: 420.0,
            protein: 32.0,
            carbs: 40.0,
            fat: 12.0,
        };
        DietPlan {
            disclaimer: Some("Please consult your physician.".to_string()),
            weekly_plan: vec![DailyPlan {
                day: Weekday::Monday,
                meals: vec![Meal {
                    name: "Lunch".to_string(),
                    time: "1:00 PM".to_string(),
                    description: "Grilled chicken salad".to_string(),
                    macros: macros.clone(),
                    recipe: Recipe {
                        prep_time: "10 min".to_string(),
                        cook_time: "15 min".to_string(),
                        servings: 1,
                        steps: vec!["Grill chicken".to_string(), "Toss salad".to_string()],
                    },
                    image_search_term: "grilled chicken salad".to_string(),
                    ingredient_substitutions: vec![IngredientSubstitution {
                        original: "chicken".to_string(),
                        suggestions: vec!["tofu".to_string(), "paneer".to_string()],
                    }],
                }],
                daily_totals: macros.clone(),
                estimated_cost: 6.5,
            }],
            weekly_averages: WeeklyAverages {
                macros,
                estimated_cost: 6.5,
            },
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_render_full_plan() {
        let text = render_plan(&plan(), "Enjoy your week!", None);

        assert!(text.starts_with("!! Please consult your physician."));
        assert!(text.contains("Enjoy your week!"));
        assert!(text.contains("=== Monday ==="));
        assert!(text.contains("420 kcal | P 32g | C 40g | F 12g"));
        assert!(text.contains("      2. Toss salad"));
        assert!(text.contains("Photo search: \"grilled chicken salad\""));
        assert!(text.contains("Swap chicken -> tofu, paneer"));
        assert!(text.contains("~6.50 USD (approx.)"));
    }

    #[test]
    fn test_render_header_layout() {
        let text = render_plan(&plan(), "Enjoy your week!", None);
        assert!(text.starts_with(
            "!! Please consult your physician.\n\n\
             Enjoy your week!\n\n\
             --- Weekly averages ---\n\
             420 kcal | P 32g | C 40g | F 12g\n\
             Estimated cost per day: ~6.50 USD (approx.)\n\n\
             === Monday ===\n  Lunch (1:00 PM)\n"
        ));
        assert!(text.ends_with("  Estimated cost: ~6.50 USD (approx.)\n\n"));
    }

    #[test]
    fn test_render_missing_day() {
        let text = render_plan(&plan(), "", Some(Weekday::Friday));
        assert!(text.contains("No meals planned."));
        assert!(!text.contains("=== Monday ==="));
    }
}
