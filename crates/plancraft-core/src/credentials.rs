//! API key lookup.
//!
//! The persisted configuration wins over the environment; blank values count
//! as unset.

use crate::{
    error::{PlannerError, Result},
    models::PlannerConfig,
};

/// Environment variable consulted when the config carries no key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolves the API key from the config record, then the environment value.
pub fn resolve_api_key(config: &PlannerConfig, env_value: Option<&str>) -> Option<String> {
    [config.gemini_api_key.as_deref(), env_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
}

/// Returns the API key or [`PlannerError::MissingApiKey`].
pub fn ensure_api_key(config: &PlannerConfig) -> Result<String> {
    let env_value = std::env::var(API_KEY_ENV).ok();
    resolve_api_key(config, env_value.as_deref()).ok_or(PlannerError::MissingApiKey)
}
