//! Core library for the Plancraft project planner.
//!
//! Turns a one-line coding task into a structured, persisted project plan
//! and tracks progress through its steps. Plans come from a Gemini model
//! when an API key is available, or from an offline template otherwise.
//!
//! # Components
//!
//! - [`generator`]: AI plan generation with a deterministic fallback
//! - [`store`]: JSON documents for plans and configuration
//! - [`progress`]: Step completion and progress bookkeeping
//! - [`credentials`]: API key lookup
//! - [`display`]: Markdown rendering of plans, lists and results
//! - [`planner`]: The async facade tying them together
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plancraft_core::{params::{CreatePlan, ListPlans}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let generated = planner.create_plan(&CreatePlan::new("Build a recipe finder")).await?;
//! println!("{}", generated.plan);
//!
//! let plans = planner.list_plans_summary(&ListPlans::default()).await?;
//! for plan in &plans {
//!     println!("{}: {}%", plan.title, plan.progress.percentage);
//! }
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod display;
pub mod error;
pub mod generator;
pub mod id;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;
pub mod store;

pub use display::{
    CreateResult, DeleteResult, OperationStatus, PlanSummaries, PlanView, ProgressBar, Steps,
    UpdateResult,
};
pub use error::{PlannerError, Result};
pub use generator::{CompletionModel, Generated, PlanGenerator, PlanSource};
pub use models::{PlanStatus, PlanStep, PlanSummary, PlannerConfig, ProjectPlan};
pub use params::{CreatePlan, DeletePlan, Id, ListPlans, SetStepCompletion};
pub use planner::{Planner, PlannerBuilder};
pub use store::PlanStore;
