//! Data models for plans, steps and configuration.
//!
//! These are the records the plan store persists as JSON. Field names are
//! serialized in camelCase and timestamps as ISO-8601 strings. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use plancraft_core::models::{PlanStep, Progress};
//!
//! let mut steps = vec![PlanStep::new(1, "Setup", ""), PlanStep::new(2, "Build", "")];
//! steps[1].completed = true;
//! assert_eq!(Progress::from_steps(&steps).percentage, 50);
//! ```

pub mod config;
pub mod filters;
pub mod plan;
pub mod status;
pub mod step;
pub mod summary;


pub use config::PlannerConfig;
pub use filters::PlanFilter;
pub use plan::{FileStructure, Overview, PlanDependencies, Progress, ProjectPlan};
pub use status::{Complexity, PlanStatus};
pub use step::PlanStep;
pub use summary::PlanSummary;
