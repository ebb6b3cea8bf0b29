//! Startup configuration.
//!
//! Resolution chain: CLI flag > environment (including `.env`) > default.
//! The generation credential is checked once, before any request is built.

use std::path::{Path, PathBuf};

use crate::error::{DietError, Result};
use crate::planner::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const DATA_DIR_VAR: &str = "DIET_PLAN_DIR";

const APP_DIR_NAME: &str = "diet-planner";

/// Settings for talking to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR)
            .or_else(|| non_blank(LEGACY_API_KEY_VAR))
            .ok_or_else(|| {
                DietError::Configuration(format!(
                    "{} environment variable is not set",
                    API_KEY_VAR
                ))
            })?;

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model: non_blank(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

/// Directory that holds the persistence slot.
///
/// Flag, then `DIET_PLAN_DIR`, then the platform data directory, then a
/// hidden directory under the working directory.
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var(DATA_DIR_VAR)
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR_NAME)))
}
