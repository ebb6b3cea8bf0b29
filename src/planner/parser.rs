//! Recovers the plan object and the trailing summary from raw model output.
//!
//! The model is asked for a JSON object followed by a short summary, but it
//! sometimes wraps the object in a markdown fence or adds a preamble. The
//! extraction strategy sits behind [`PlanExtractor`] so a provider with a
//! dedicated structured-output channel can bypass the text heuristics.

use tracing::debug;

use crate::error::ParseError;
use crate::models::DietPlan;
use crate::planner::constants::{CODE_FENCE, JSON_FENCE};

/// A JSON candidate and the free text that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    pub json: &'a str,
    pub summary: &'a str,
}

pub trait PlanExtractor {
    fn extract<'a>(&self, raw: &'a str) -> Result<Extracted<'a>, ParseError>;
}

/// Fenced ```` ```json ```` block first, then the outermost brace span.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceThenBraceExtractor;

impl PlanExtractor for FenceThenBraceExtractor {
    fn extract<'a>(&self, raw: &'a str) -> Result<Extracted<'a>, ParseError> {
        extract_fenced(raw)
            .or_else(|| extract_braced(raw))
            .ok_or(ParseError::NoJsonFound)
    }
}

fn extract_fenced(raw: &str) -> Option<Extracted<'_>> {
    let open = raw.find(JSON_FENCE)?;
    let body_start = open + JSON_FENCE.len();
    let close = body_start + raw[body_start..].find(CODE_FENCE)?;

    Some(Extracted {
        json: raw[body_start..close].trim(),
        summary: raw[close + CODE_FENCE.len()..].trim(),
    })
}

fn extract_braced(raw: &str) -> Option<Extracted<'_>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    Some(Extracted {
        json: &raw[start..=end],
        summary: raw[end + 1..].trim(),
    })
}

/// Parse raw model output with the default extractor.
pub fn parse_response(raw: &str) -> Result<(DietPlan, String), ParseError> {
    parse_with(&FenceThenBraceExtractor, raw)
}

/// Parse raw model output with a caller-chosen extraction strategy.
pub fn parse_with<E: PlanExtractor + ?Sized>(
    extractor: &E,
    raw: &str,
) -> Result<(DietPlan, String), ParseError> {
    let extracted = extractor.extract(raw)?;
    debug!(
        json_len = extracted.json.len(),
        summary_len = extracted.summary.len(),
        "Extracted plan candidate"
    );

    let plan: DietPlan = serde_json::from_str(extracted.json).map_err(ParseError::InvalidJson)?;
    Ok((plan, extracted.summary.to_string()))
}
