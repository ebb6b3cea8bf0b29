use tracing::{info, warn};

use crate::error::{CorruptedStateError, DietError};
use crate::models::DietPlan;
use crate::planner::constants::{PLAN_KEY, SUMMARY_KEY};
use crate::state::persistence::Storage;

/// A plan read back from the persistence slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlan {
    pub plan: DietPlan,
    pub summary: String,
}

/// What the persistence slot held when asked for the saved plan.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedState {
    Loaded(SavedPlan),
    Empty,
    /// The plan was unreadable; the slot has already been cleared.
    Corrupted,
}

impl SavedState {
    /// The loaded plan, or the error a command needing one should fail with.
    pub fn into_plan(self) -> Result<SavedPlan, DietError> {
        match self {
            SavedState::Loaded(saved) => Ok(saved),
            SavedState::Empty => Err(DietError::NoSavedPlan),
            SavedState::Corrupted => Err(DietError::CorruptedPlan),
        }
    }
}

/// Single-slot store for the last generated plan and its summary.
///
/// Write failures are logged and swallowed: losing the ability to save
/// must never block showing a freshly generated plan.
#[derive(Debug, Clone)]
pub struct PlanStore<S: Storage> {
    storage: S,
}

impl<S: Storage> PlanStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Overwrite the slot. Returns whether both entries were written.
    pub fn save(&mut self, plan: &DietPlan, summary: &str) -> bool {
        let json = match serde_json::to_string(plan) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize plan for saving: {}", e);
                return false;
            }
        };

        if let Err(e) = self.storage.set(PLAN_KEY, &json) {
            warn!("Failed to save plan: {}", e);
            return false;
        }
        if let Err(e) = self.storage.set(SUMMARY_KEY, summary) {
            warn!("Failed to save plan summary: {}", e);
            // The old summary must not be read back next to the new plan.
            if let Err(e) = self.storage.remove(PLAN_KEY) {
                warn!("Failed to roll back plan after summary write: {}", e);
            }
            return false;
        }

        info!(bytes = json.len(), "Saved plan");
        true
    }

    /// Read the slot back.
    ///
    /// `Ok(None)` when either entry is missing or unreadable; an error only
    /// when the plan text is present but does not deserialize.
    pub fn load(&self) -> Result<Option<SavedPlan>, CorruptedStateError> {
        let plan_text = self.read(PLAN_KEY);
        let summary = self.read(SUMMARY_KEY);

        let (Some(plan_text), Some(summary)) = (plan_text, summary) else {
            return Ok(None);
        };

        let plan = serde_json::from_str(&plan_text).map_err(CorruptedStateError)?;
        Ok(Some(SavedPlan { plan, summary }))
    }

    /// Read the slot back, clearing it if the plan is corrupted.
    pub fn load_saved(&mut self) -> SavedState {
        match self.load() {
            Ok(Some(saved)) => SavedState::Loaded(saved),
            Ok(None) => SavedState::Empty,
            Err(e) => {
                warn!("{}; clearing saved plan", e);
                self.clear();
                SavedState::Corrupted
            }
        }
    }

    /// Remove both entries.
    pub fn clear(&mut self) {
        for key in [PLAN_KEY, SUMMARY_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to clear {}: {}", key, e);
            }
        }
    }

    /// True when a plan entry is present, valid or not.
    pub fn exists(&self) -> bool {
        self.read(PLAN_KEY).is_some()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }
}
