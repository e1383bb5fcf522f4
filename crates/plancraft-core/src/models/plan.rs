//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Complexity, PlanStatus, PlanStep};

/// Represents a complete plan with metadata and steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPlan {
    /// Unique identifier for the plan, also its file name in the store
    pub id: String,

    /// Title of the plan
    pub title: String,

    /// Free-text description of the task the plan covers
    #[serde(default)]
    pub description: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Status of the plan, set by the user
    #[serde(default)]
    pub status: PlanStatus,

    #[serde(default)]
    pub overview: Overview,

    #[serde(default)]
    pub file_structure: FileStructure,

    #[serde(default)]
    pub dependencies: PlanDependencies,

    /// Ordered steps of the plan
    #[serde(default)]
    pub steps: Vec<PlanStep>,

    /// Cached completion counters, kept in sync with `steps`
    #[serde(default)]
    pub progress: Progress,
}

impl ProjectPlan {
    /// Recomputes the cached progress from the current steps.
    pub fn refresh_progress(&mut self) {
        self.progress = Progress::from_steps(&self.steps);
    }

    /// Looks up a step by its 1-based order.
    pub fn step(&self, order: u32) -> Option<&PlanStep> {
        self.steps.iter().find(|step| step.order == order)
    }

    /// Returns the first step that is not yet completed.
    pub fn next_step(&self) -> Option<&PlanStep> {
        self.steps.iter().find(|step| !step.completed)
    }
}

/// High-level metadata describing the kind of project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub project_type: String,
    pub estimated_time: String,
    #[serde(default)]
    pub complexity: Complexity,
}

impl Default for Overview {
    fn default() -> Self {
        Self {
            project_type: "fullstack".to_string(),
            estimated_time: "TBD".to_string(),
            complexity: Complexity::Medium,
        }
    }
}

/// Directories and files the plan expects to create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileStructure {
    #[serde(default)]
    pub directories: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

/// External dependencies the plan relies on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanDependencies {
    #[serde(default)]
    pub npm: Vec<String>,
    #[serde(default)]
    pub apis: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl PlanDependencies {
    /// True when no dependency of any kind is listed.
    pub fn is_empty(&self) -> bool {
        self.npm.is_empty() && self.apis.is_empty() && self.services.is_empty()
    }
}

/// Completion counters derived from a plan's steps.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub completed_steps: u32,
    pub total_steps: u32,
    /// Rounded completion percentage, 0 for a plan without steps
    pub percentage: u32,
}

impl Progress {
    /// Computes progress for a slice of steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plancraft_core::models::{PlanStep, Progress};
    ///
    /// let mut steps: Vec<PlanStep> = (1..=3).map(|n| PlanStep::new(n, "step", "")).collect();
    /// steps[0].completed = true;
    ///
    /// let progress = Progress::from_steps(&steps);
    /// assert_eq!(progress.completed_steps, 1);
    /// assert_eq!(progress.percentage, 33);
    /// ```
    pub fn from_steps(steps: &[PlanStep]) -> Self {
        let total_steps = steps.len() as u32;
        let completed_steps = steps.iter().filter(|step| step.completed).count() as u32;
        let percentage = if total_steps == 0 {
            0
        } else {
            (100.0 * f64::from(completed_steps) / f64::from(total_steps)).round() as u32
        };

        Self {
            completed_steps,
            total_steps,
            percentage,
        }
    }

    /// Number of steps still open.
    pub fn remaining_steps(&self) -> u32 {
        self.total_steps.saturating_sub(self.completed_steps)
    }
}
