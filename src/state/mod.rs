mod persistence;
mod store;

pub use persistence::{DirStorage, MemoryStorage, Storage};
pub use store::{PlanStore, SavedPlan, SavedState};
