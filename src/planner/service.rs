use tracing::{error, info, warn};

use crate::error::Result;
use crate::llm::GenerationClient;
use crate::models::{DietPlan, UserProfile};
use crate::planner::parser::parse_response;
use crate::planner::request::PlanRequest;
use crate::state::{PlanStore, SavedState, Storage};

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub plan: DietPlan,
    pub summary: String,
    /// Whether the plan made it into the persistence slot.
    pub saved: bool,
}

/// Composes request building, generation, parsing and persistence.
pub struct DietPlanner<C: GenerationClient, S: Storage> {
    client: C,
    store: PlanStore<S>,
}

impl<C: GenerationClient, S: Storage> DietPlanner<C, S> {
    pub fn new(client: C, store: PlanStore<S>) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &PlanStore<S> {
        &self.store
    }

    /// Generate a plan for the profile and save it.
    ///
    /// On any error the persistence slot is left as it was.
    pub async fn generate(&mut self, profile: &UserProfile) -> Result<GeneratedPlan> {
        let request = PlanRequest::from_profile(profile);

        let raw = self.client.generate(&request).await.inspect_err(|e| {
            error!("Diet plan generation failed: {}", e);
        })?;
        info!(chars = raw.len(), "Received model response");

        let (plan, summary) = parse_response(&raw).inspect_err(|e| {
            error!("Could not parse diet plan: {}", e);
        })?;

        for warning in plan.warnings(Some(profile)) {
            warn!("Generated plan: {}", warning);
        }

        let saved = self.store.save(&plan, &summary);
        Ok(GeneratedPlan {
            plan,
            summary,
            saved,
        })
    }

    /// Read back the saved plan, clearing the slot if it is corrupted.
    pub fn load_saved(&mut self) -> SavedState {
        self.store.load_saved()
    }

    pub fn has_saved_plan(&self) -> bool {
        self.store.exists()
    }

    pub fn reset(&mut self) {
        self.store.clear();
    }
}
