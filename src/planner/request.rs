use serde_json::Value;

use crate::models::UserProfile;
use crate::planner::schema::diet_plan_schema;

/// Instruction text plus the response schema sent to the generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub instruction: String,
    pub schema: Value,
}

impl PlanRequest {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            instruction: build_instruction(profile),
            schema: diet_plan_schema(),
        }
    }
}

fn or_none(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "None specified"
    } else {
        trimmed
    }
}

/// Render the profile and the plan directives as a single instruction.
pub fn build_instruction(profile: &UserProfile) -> String {
    format!(
        r#"
You are a professional registered-dietitian-level assistant with product-minded behavior. Produce a medically sensible, culturally and regionally-aware weekly diet plan tailored to the user's inputs.

User Profile:
- Age: {age}
- Gender: {gender}
- Weight: {weight} kg
- Height: {height} cm
- Activity Level: {activity}
- Goal: {goal}
- Location/Region: {region}
- Budget Tier: {budget}
- Currency for Cost Estimates: {currency}

Constraints & Preferences:
- Allergies: {allergies}
- Dietary Preferences (religious/ethical): {preferences}
- Medical Conditions: {medical}

Your Task:
1.  Generate a complete 7-day diet plan, Monday through Sunday.
2.  The output must be a single, strictly valid JSON object that conforms to the provided schema. Do not add any extra commentary, explanations, or markdown formatting around the JSON object itself.
3.  After the JSON object, add a single newline, and then provide a 2-4 sentence friendly, practical, and encouraging human-readable summary of the plan.

Key Directives:
- Respect all allergies, religious/ethical preferences, and medical conditions.
- If medical conditions (e.g., diabetes, hypertension, CKD) are mentioned, YOU MUST include a clear "disclaimer" in the JSON directing the user to consult a medical practitioner and generate a conservative plan that does not risk health.
- Use local ingredient names appropriate for the user's region (e.g., for India: "roti", "idli", "poha", "daal"). If an ingredient is not common, suggest a widely-available substitute.
- Ingredient choices and portioning must be consistent with the specified budget tier.
- Provide macronutrient (calories, protein, carbs, fat) totals for each meal and each day, plus a weekly average.
- For each meal, provide an `imageSearchTerm`. This should be a simple, descriptive phrase suitable for an image search API to find a relevant photo of the dish. For example: "grilled chicken salad with avocado" or "bowl of lentil soup".
- Provide approximate cost estimates per day and for the week in {currency}. Mark these as estimates.
- Recipes must have simple steps (3-8), prep time, cook time, and estimated servings.
- For each major ingredient in a meal, provide 2-3 substitution suggestions for affordability and availability.
- Ensure all JSON keys and data types follow the schema exactly.
"#,
        age = profile.age,
        gender = profile.gender.value(),
        weight = profile.weight,
        height = profile.height,
        activity = profile.activity_level.value().replace('_', " "),
        goal = profile.goal.value().replace('_', " "),
        region = profile.region.trim(),
        budget = profile.budget.value().replace('_', " "),
        currency = profile.currency.trim(),
        allergies = or_none(&profile.allergies),
        preferences = or_none(&profile.preferences),
        medical = or_none(&profile.medical_conditions),
    )
}
