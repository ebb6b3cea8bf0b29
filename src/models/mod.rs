pub mod plan;
pub mod profile;

pub use plan::{
    DailyPlan, DietPlan, IngredientSubstitution, MacroNutrients, Meal, Recipe, WeeklyAverages,
    Weekday,
};
pub use profile::{ActivityLevel, Budget, Gender, Goal, UserProfile};
