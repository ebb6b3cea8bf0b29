mod gemini;

pub use gemini::GeminiClient;

use crate::error::GenerationError;
use crate::planner::PlanRequest;

/// Boundary to the external generation service.
///
/// Implementations send the request once and hand back the raw text; they
/// neither retry nor interpret the content.
#[allow(async_fn_in_trait)]
pub trait GenerationClient {
    async fn generate(&self, request: &PlanRequest) -> Result<String, GenerationError>;
}
