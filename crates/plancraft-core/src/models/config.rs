//! Persisted planner configuration.

use serde::{Deserialize, Serialize};

/// Default number of plans shown by `list`.
pub const DEFAULT_MAX_PLANS: usize = 50;

/// Installation-wide configuration record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Gemini API key; takes precedence over `GEMINI_API_KEY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    /// Directory new projects are expected to live in
    #[serde(default = "default_output_dir")]
    pub default_output_dir: String,

    /// Default listing limit
    #[serde(default = "default_max_plans")]
    pub max_plans: usize,
}

fn default_max_plans() -> usize {
    DEFAULT_MAX_PLANS
}

fn default_output_dir() -> String {
    std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| ".".to_string())
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            default_output_dir: default_output_dir(),
            max_plans: DEFAULT_MAX_PLANS,
        }
    }
}

impl PlannerConfig {
    /// API key with all but the last four characters hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.gemini_api_key.as_deref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                return "****".to_string();
            }
            let visible: String = chars[chars.len() - 4..].iter().collect();
            format!("****{visible}")
        })
    }
}
