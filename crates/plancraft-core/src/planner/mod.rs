//! High-level planner API.
//!
//! [`Planner`] is the entry point used by the CLI. It coordinates the plan
//! generator, the file-backed [`PlanStore`] and the progress engine:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Plan ops      │    │   Generator     │    │   PlanStore     │
//! │ (create, list,  │───▶│ (AI + fallback) │    │ (JSON files in  │
//! │  show, delete)  │───────────────────────────▶│  the data dir)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Store calls are synchronous file I/O and run on the blocking thread pool;
//! only the AI request is truly async.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`plan_ops`]: Plan generation, lookup, listing and deletion
//! - [`step_ops`]: Step completion
//! - [`config_ops`]: Persisted configuration and API key handling
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use plancraft_core::{params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_data_dir(Some("/tmp/plancraft"))
//!     .build()
//!     .await?;
//!
//! let mut params = CreatePlan::new("Build a todo app with authentication");
//! params.use_ai = false;
//!
//! let generated = planner.create_plan(&params).await?;
//! println!("{}", generated.plan);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::task;

use crate::{
    error::{PlannerError, Result},
    generator::CompletionModel,
    store::PlanStore,
};

pub mod builder;
pub mod config_ops;
pub mod plan_ops;
pub mod step_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for generating and tracking plans.
pub struct Planner {
    pub(crate) store: PlanStore,
    pub(crate) model: Option<Arc<dyn CompletionModel>>,
}

impl Planner {
    /// Creates a planner over the given store.
    pub(crate) fn new(store: PlanStore, model: Option<Arc<dyn CompletionModel>>) -> Self {
        Self { store, model }
    }

    /// The underlying plan store.
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// Runs a synchronous store operation on the blocking thread pool.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PlanStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        task::spawn_blocking(move || f(&store))
            .await
            .map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
