//! Configuration operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    credentials::{resolve_api_key, API_KEY_ENV},
    error::{PlannerError, Result},
    models::PlannerConfig,
};

impl Planner {
    /// Reads the persisted configuration, or defaults if none is saved.
    pub async fn config(&self) -> Result<PlannerConfig> {
        self.with_store(|store| Ok(store.load_config())).await
    }

    /// Replaces the persisted configuration.
    pub async fn save_config(&self, config: &PlannerConfig) -> Result<()> {
        let config = config.clone();
        self.with_store(move |store| store.save_config(&config))
            .await
    }

    /// Stores an API key in the configuration, keeping the other settings.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a blank key.
    pub async fn set_api_key(&self, key: &str) -> Result<PlannerConfig> {
        let key = key.trim();
        if key.is_empty() {
            return Err(PlannerError::invalid_input("apiKey").with_reason("must not be empty"));
        }

        let key = key.to_string();
        let config = self
            .with_store(move |store| {
                let mut config = store.load_config();
                config.gemini_api_key = Some(key);
                store.save_config(&config)?;
                Ok(config)
            })
            .await?;

        info!("Stored Gemini API key");
        Ok(config)
    }

    /// Overwrites the configuration with defaults.
    pub async fn reset_config(&self) -> Result<PlannerConfig> {
        let config = self.with_store(|store| store.reset_config()).await?;
        info!("Configuration reset to defaults");
        Ok(config)
    }

    /// The API key that AI generation would use, if any.
    pub async fn api_key(&self) -> Result<Option<String>> {
        let config = self.config().await?;
        let env_value = std::env::var(API_KEY_ENV).ok();
        Ok(resolve_api_key(&config, env_value.as_deref()))
    }
}
