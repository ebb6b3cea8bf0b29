use serde_json::{Value, json};

fn macros_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "calories": { "type": "NUMBER" },
            "protein": { "type": "NUMBER" },
            "carbs": { "type": "NUMBER" },
            "fat": { "type": "NUMBER" }
        },
        "required": ["calories", "protein", "carbs", "fat"]
    })
}

fn meal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "e.g., Breakfast, Lunch, Dinner, Snack" },
            "time": { "type": "STRING", "description": "e.g., 8:00 AM" },
            "description": { "type": "STRING", "description": "A brief description of the meal." },
            "macros": macros_schema(),
            "recipe": {
                "type": "OBJECT",
                "properties": {
                    "prepTime": { "type": "STRING" },
                    "cookTime": { "type": "STRING" },
                    "servings": { "type": "NUMBER" },
                    "steps": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["prepTime", "cookTime", "servings", "steps"]
            },
            "imageSearchTerm": {
                "type": "STRING",
                "description": "A simple, descriptive search term for a stock photo of the meal (e.g., 'bowl of oatmeal with berries')."
            },
            "ingredientSubstitutions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "original": { "type": "STRING" },
                        "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["original", "suggestions"]
                }
            }
        },
        "required": [
            "name",
            "time",
            "description",
            "macros",
            "recipe",
            "imageSearchTerm",
            "ingredientSubstitutions"
        ]
    })
}

/// Response schema for the generation request, in Gemini's `responseSchema`
/// dialect. Mirrors the serde shape of [`crate::models::DietPlan`].
pub fn diet_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "disclaimer": {
                "type": "STRING",
                "nullable": true,
                "description": "A disclaimer to consult a medical practitioner, especially if medical conditions are listed."
            },
            "weeklyPlan": {
                "type": "ARRAY",
                "description": "An array of 7 daily meal plans.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": {
                            "type": "STRING",
                            "enum": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
                        },
                        "meals": { "type": "ARRAY", "items": meal_schema() },
                        "dailyTotals": macros_schema(),
                        "estimatedCost": { "type": "NUMBER" }
                    },
                    "required": ["day", "meals", "dailyTotals", "estimatedCost"]
                }
            },
            "weeklyAverages": {
                "type": "OBJECT",
                "properties": {
                    "macros": macros_schema(),
                    "estimatedCost": { "type": "NUMBER" }
                },
                "required": ["macros", "estimatedCost"]
            },
            "currency": {
                "type": "STRING",
                "description": "The currency code used for cost estimates, e.g., USD, INR."
            }
        },
        "required": ["weeklyPlan", "weeklyAverages", "currency"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_required_fields() {
        let schema = diet_plan_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, ["weeklyPlan", "weeklyAverages", "currency"]);
        assert_eq!(schema["properties"]["disclaimer"]["nullable"], true);
    }

    #[test]
    fn test_meal_requires_image_search_term() {
        let schema = diet_plan_schema();
        let meal = &schema["properties"]["weeklyPlan"]["items"]["properties"]["meals"]["items"];
        let required = meal["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "imageSearchTerm"));
        assert!(required.iter().any(|v| v == "ingredientSubstitutions"));
        assert_eq!(meal["properties"]["macros"]["required"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_day_enum_lists_every_weekday() {
        let schema = diet_plan_schema();
        let days = schema["properties"]["weeklyPlan"]["items"]["properties"]["day"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], "Monday");
        assert_eq!(days[6], "Sunday");
    }
}
