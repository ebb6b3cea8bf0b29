/// Opening marker of a fenced JSON block in model output.
pub const JSON_FENCE: &str = "```json";

/// Closing marker of any fenced block.
pub const CODE_FENCE: &str = "```";

// ─────────────────────────────────────────────────────────────────────────────
// Persistence slot keys
// ─────────────────────────────────────────────────────────────────────────────

/// Storage key holding the JSON text of the last plan.
pub const PLAN_KEY: &str = "dietPlan";

/// Storage key holding the plain-text summary of the last plan.
pub const SUMMARY_KEY: &str = "dietPlanSummary";

// ─────────────────────────────────────────────────────────────────────────────
// Generation service defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// MIME type requested for the model's reply.
pub const RESPONSE_MIME_TYPE: &str = "application/json";
