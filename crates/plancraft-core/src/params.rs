//! Parameter structures for plancraft operations
//!
//! These structures carry requests from an interface layer (the CLI today)
//! into the [`Planner`](crate::Planner) without any framework-specific
//! derives. The CLI defines clap wrappers and converts them with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use serde::{Deserialize, Serialize};

use crate::models::PlanStatus;

/// Parameters for generating and saving a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Natural-language description of the coding task
    pub task: String,
    /// Kind of project (e.g. "fullstack", "frontend", "cli")
    pub project_type: Option<String>,
    /// Framework hint (e.g. "react", "vue")
    pub framework: Option<String>,
    /// Ask the AI model; when false the offline template is used
    pub use_ai: bool,
}

impl CreatePlan {
    /// Creates parameters for an AI-backed plan with no hints.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            project_type: None,
            framework: None,
            use_ai: true,
        }
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Only show plans with this status
    pub status: Option<PlanStatus>,
    /// Maximum number of plans to return
    pub limit: Option<usize>,
}

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

/// Parameters for marking a step complete or incomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStepCompletion {
    /// ID of the plan owning the step
    pub plan_id: String,
    /// 1-based order of the step
    pub step: u32,
    /// New completion flag
    pub completed: bool,
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: String,
    /// Explicit confirmation flag to prevent accidental deletion
    pub confirmed: bool,
}
