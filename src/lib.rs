pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod llm;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{DietError, Result};
pub use models::{DietPlan, UserProfile};
