use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainMuscle,
}

/// Budget tier the ingredient choices must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Low,
    LowerMiddle,
    Middle,
    UpperMiddle,
    High,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly Active (light exercise/sports 1-3 days/week)",
            ActivityLevel::ModeratelyActive => {
                "Moderately Active (moderate exercise/sports 3-5 days/week)"
            }
            ActivityLevel::VeryActive => "Very Active (hard exercise/sports 6-7 days a week)",
            ActivityLevel::ExtraActive => "Extra Active (very hard exercise/physical job)",
        }
    }
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseWeight, Goal::MaintainWeight, Goal::GainMuscle];

    pub fn value(self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::MaintainWeight => "maintain_weight",
            Goal::GainMuscle => "gain_muscle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::LoseWeight => "Lose Weight",
            Goal::MaintainWeight => "Maintain Weight",
            Goal::GainMuscle => "Gain Muscle",
        }
    }
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::Low,
        Budget::LowerMiddle,
        Budget::Middle,
        Budget::UpperMiddle,
        Budget::High,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::LowerMiddle => "lower_middle",
            Budget::Middle => "middle",
            Budget::UpperMiddle => "upper_middle",
            Budget::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::LowerMiddle => "Lower-Middle",
            Budget::Middle => "Middle",
            Budget::UpperMiddle => "Upper-Middle",
            Budget::High => "High / Luxury",
        }
    }
}

/// Health and dietary profile submitted by the user.
///
/// Free-text fields may be empty; the request builder renders empty ones
/// as "None specified".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub preferences: String,
    #[serde(default)]
    pub medical_conditions: String,
    pub region: String,
    pub budget: Budget,
    pub currency: String,
}

impl UserProfile {
    /// True when the user listed any medical condition.
    pub fn has_medical_conditions(&self) -> bool {
        !self.medical_conditions.trim().is_empty()
    }

    /// Basic sanity check of the numeric fields and required text.
    pub fn is_valid(&self) -> bool {
        self.age > 0
            && self.weight > 0.0
            && self.height > 0.0
            && !self.region.trim().is_empty()
            && !self.currency.trim().is_empty()
    }
}
