use thiserror::Error;

/// Shown when the saved plan could not be read and has been discarded.
pub const CORRUPTED_PLAN_MESSAGE: &str = "Failed to load saved plan. It might be corrupted.";

/// Failure to turn raw model output into a plan.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON found in the model response")]
    NoJsonFound,

    #[error("invalid JSON in the model response: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// Failure of the generation service call itself.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("generation service returned an unreadable response: {0}")]
    Envelope(String),

    #[error("generation service returned no text")]
    EmptyResponse,
}

/// The persisted plan exists but cannot be read back.
#[derive(Debug, Error)]
#[error("saved plan is corrupted: {0}")]
pub struct CorruptedStateError(#[source] pub serde_json::Error);

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    CorruptedState(#[from] CorruptedStateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No saved plan")]
    NoSavedPlan,

    /// The saved plan was unreadable and has been cleared.
    #[error("Saved plan was corrupted and has been cleared")]
    CorruptedPlan,
}

impl DietError {
    /// Message shown to the user.
    ///
    /// Generation and parse failures read the same: either way no usable
    /// plan was produced.
    pub fn user_message(&self) -> String {
        match self {
            DietError::Generation(e) => format!("Failed to generate diet plan: {}", e),
            DietError::Parse(e) => format!("Failed to generate diet plan: {}", e),
            DietError::CorruptedState(_) | DietError::CorruptedPlan => {
                CORRUPTED_PLAN_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DietError>;
