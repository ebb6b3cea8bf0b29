pub mod constants;
pub mod parser;
pub mod request;
pub mod schema;
pub mod service;

pub use parser::{Extracted, FenceThenBraceExtractor, PlanExtractor, parse_response, parse_with};
pub use request::{PlanRequest, build_instruction};
pub use schema::diet_plan_schema;
pub use service::{DietPlanner, GeneratedPlan};
