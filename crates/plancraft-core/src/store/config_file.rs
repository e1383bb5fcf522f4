//! Configuration document operations.

use std::fs;

use log::{debug, warn};

use super::PlanStore;
use crate::{error::Result, models::PlannerConfig};

impl PlanStore {
    /// Reads the configuration, falling back to defaults when the document
    /// is missing or unreadable.
    pub fn load_config(&self) -> PlannerConfig {
        let path = self.config_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("Using default config ({}: {e})", path.display());
                return PlannerConfig::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Ignoring corrupt config {}: {e}", path.display());
            PlannerConfig::default()
        })
    }

    /// Replaces the configuration document.
    pub fn save_config(&self, config: &PlannerConfig) -> Result<()> {
        Self::write_json(&self.config_path(), config)
    }

    /// Overwrites the configuration with defaults and returns them.
    pub fn reset_config(&self) -> Result<PlannerConfig> {
        let config = PlannerConfig::default();
        self.save_config(&config)?;
        Ok(config)
    }
}
