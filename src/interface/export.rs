use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::DietPlan;

const HEADER: [&str; 10] = [
    "day",
    "meal",
    "time",
    "calories",
    "protein",
    "carbs",
    "fat",
    "servings",
    "day_estimated_cost",
    "currency",
];

/// Write one CSV row per meal.
pub fn write_plan_csv<W: Write>(plan: &DietPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for day in &plan.weekly_plan {
        for meal in &day.meals {
            wtr.write_record([
                day.day.name().to_string(),
                meal.name.clone(),
                meal.time.clone(),
                format!("{:.0}", meal.macros.calories),
                format!("{:.1}", meal.macros.protein),
                format!("{:.1}", meal.macros.carbs),
                format!("{:.1}", meal.macros.fat),
                meal.recipe.servings.to_string(),
                format!("{:.2}", day.estimated_cost),
                plan.currency.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Export the plan's meals to a CSV file.
pub fn export_plan_csv(plan: &DietPlan, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(plan, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyPlan, MacroNutrients, Meal, Recipe, WeeklyAverages, Weekday};

    fn plan() -> DietPlan {
        let macros = MacroNutrients {
            calories: 310.4,
            protein: 12.26,
            carbs: 48.0,
            fat: 7.0,
        };
        DietPlan {
            disclaimer: None,
            weekly_plan: vec![DailyPlan {
                day: Weekday::Tuesday,
                meals: vec![Meal {
                    name: "Breakfast".to_string(),
                    time: "8:00 AM".to_string(),
                    description: "Idli, sambar".to_string(),
                    macros: macros.clone(),
                    recipe: Recipe {
                        prep_time: "5 min".to_string(),
                        cook_time: "20 min".to_string(),
                        servings: 2,
                        steps: vec![],
                    },
                    image_search_term: "idli sambar".to_string(),
                    ingredient_substitutions: vec![],
                }],
                daily_totals: macros.clone(),
                estimated_cost: 80.0,
            }],
            weekly_averages: WeeklyAverages {
                macros,
                estimated_cost: 80.0,
            },
            currency: "INR".to_string(),
        }
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_plan_csv(&plan(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "day,meal,time,calories,protein,carbs,fat,servings,day_estimated_cost,currency"
        );
        assert_eq!(lines[1], "Tuesday,Breakfast,8:00 AM,310,12.3,48.0,7.0,2,80.00,INR");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plan.csv");
        export_plan_csv(&plan(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Tuesday,Breakfast,8:00 AM"));
    }
}
