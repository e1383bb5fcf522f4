//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    generator::CompletionModel,
    store::PlanStore,
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    data_dir: Option<PathBuf>,
    model: Option<Arc<dyn CompletionModel>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/plancraft` or `~/.config/plancraft`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given model for AI generation instead of a Gemini client
    /// built from the configured API key.
    pub fn with_model(mut self, model: Arc<dyn CompletionModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if no default directory can be
    /// determined, or `PlannerError::FileSystem` if the plans directory
    /// cannot be created.
    pub async fn build(self) -> Result<Planner> {
        let data_dir = match self.data_dir {
            Some(path) => path,
            None => Self::default_data_dir()?,
        };

        let store = PlanStore::new(&data_dir);
        let plans_dir = store.plans_dir();
        std::fs::create_dir_all(&plans_dir)
            .map_err(|e| PlannerError::file_system(&plans_dir, e))?;

        debug!("Using data directory {}", data_dir.display());
        Ok(Planner::new(store, self.model))
    }

    /// Returns the default data directory following XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        let config_file = xdg::BaseDirectories::with_prefix("plancraft")
            .place_config_file("config.json")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))?;

        config_file
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| PlannerError::XdgDirectory("config directory has no parent".into()))
    }
}
